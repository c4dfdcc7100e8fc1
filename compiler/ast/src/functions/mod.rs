// Copyright (C) 2026 The Jay Team.
// This file is part of the Jay library.

// The Jay library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Jay library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Jay library. If not, see <https://www.gnu.org/licenses/>.

use crate::{simple_node_impl, BlockStatement, Identifier, Node};
use jay_span::Span;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

mod function_declaration;
pub use function_declaration::*;

mod function_expression;
pub use function_expression::*;
