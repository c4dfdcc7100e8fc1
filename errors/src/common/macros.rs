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

/// A macro that given an error type, a code mask, a code prefix, and a
/// list of error messages, generates the error enum and one constructor
/// per message.
///
/// Messages declared `@formatted` carry a [`Span`](jay_span::Span) and
/// render with it; messages declared `@backtraced` only capture a
/// backtrace. Exit codes are assigned in declaration order on top of the
/// code mask, so appending new messages never renumbers existing ones.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $($rest:tt)*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Debug, thiserror::Error)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted(#[from] $crate::common::Formatted),

            #[error(transparent)]
            Backtraced(#[from] $crate::common::Backtraced),
        }

        impl $type_ {
            /// The mask over which this error type assigns its exit codes.
            #[inline(always)]
            pub fn code_mask() -> i32 {
                $code_mask
            }

            /// The prefix that identifies this error type in rendered codes.
            #[inline(always)]
            pub fn code_prefix() -> &'static str {
                $code_prefix
            }

            /// The exit code of the error.
            pub fn exit_code(&self) -> i32 {
                match self {
                    Self::Formatted(formatted) => formatted.exit_code,
                    Self::Backtraced(backtraced) => backtraced.exit_code,
                }
            }

            /// The rendered error code, e.g. `EPAR0370003`.
            pub fn error_code(&self) -> String {
                match self {
                    Self::Formatted(formatted) => formatted.code.clone(),
                    Self::Backtraced(backtraced) => backtraced.code.clone(),
                }
            }
        }

        $crate::create_messages!(@step $type_, 0i32; $($rest)*);
    };

    (@step $type_:ident, $code:expr;
        $(#[$error_func_docs:meta])*
        @formatted $name:ident {
            args: ($($arg_names:ident: $arg_types:ty),* $(,)?),
            msg: $message:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        impl $type_ {
            $(#[$error_func_docs])*
            pub fn $name($($arg_names: $arg_types,)* span: jay_span::Span) -> Self {
                Self::Formatted($crate::common::Formatted::new_from_span(
                    $message,
                    $help,
                    Self::code_mask() + $code,
                    format!("E{}{:07}", Self::code_prefix(), Self::code_mask() + $code),
                    span,
                    backtrace::Backtrace::new(),
                ))
            }
        }

        $crate::create_messages!(@step $type_, $code + 1i32; $($rest)*);
    };

    (@step $type_:ident, $code:expr;
        $(#[$error_func_docs:meta])*
        @backtraced $name:ident {
            args: ($($arg_names:ident: $arg_types:ty),* $(,)?),
            msg: $message:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        impl $type_ {
            $(#[$error_func_docs])*
            pub fn $name($($arg_names: $arg_types,)*) -> Self {
                Self::Backtraced($crate::common::Backtraced::new_from_backtrace(
                    $message,
                    $help,
                    Self::code_mask() + $code,
                    format!("E{}{:07}", Self::code_prefix(), Self::code_mask() + $code),
                    backtrace::Backtrace::new(),
                ))
            }
        }

        $crate::create_messages!(@step $type_, $code + 1i32; $($rest)*);
    };

    (@step $type_:ident, $code:expr;) => {
        impl $type_ {
            /// Returns the number of exit codes this error type defines.
            #[inline(always)]
            pub fn num_exit_codes() -> i32 {
                $code
            }
        }
    };
}
