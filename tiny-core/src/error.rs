// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by classification, encoding and decoding.
//!
//! Error constructors sit on every buffer access path. They are marked
//! `#[cold]` so the successful paths stay tight; keep those attributes when
//! adding new variants.

use std::borrow::Cow;

use thiserror::Error;

/// Set `TINY_PANIC_ON_ERROR=1` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("TINY_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for tiny serialization and deserialization.
///
/// Always build errors through the static constructors ([`Error::unsupported_kind`],
/// [`Error::invalid_argument`], ...) rather than the variants directly, so that
/// `TINY_PANIC_ON_ERROR` can stop at the exact creation site:
///
/// ```bash
/// RUST_BACKTRACE=1 TINY_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// ```rust
/// use tiny_core::error::Error;
///
/// let err = Error::unsupported_kind("cannot encode `Foo` of kind Object");
/// let err = Error::invalid_data(format!("unknown discriminant {}", 7));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Dispatch reached a kind that has no encode/decode routine.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported_kind`] instead.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(Cow<'static, str>),

    /// Malformed configuration or invalid input.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_argument`] instead.
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// A write would exceed the buffer even after growing it.
    ///
    /// Only raised when a size computation is wrong; capacity is grown before every write.
    /// Do not construct this variant directly; use [`Error::buffer_capacity`] instead.
    #[error("buffer capacity exceeded: required {0} bytes, capacity {1}")]
    BufferCapacity(usize, usize),

    /// A read ran past the end of the input.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_out_of_bound`] instead.
    #[error("buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// Input bytes do not describe a valid value of the requested type.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    /// Text could not be encoded or decoded with the configured codec.
    ///
    /// Do not construct this variant directly; use [`Error::encoding_error`] instead.
    #[error("{0}")]
    EncodingError(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::UnsupportedKind`].
    ///
    /// ```
    /// use tiny_core::error::Error;
    ///
    /// let err = Error::unsupported_kind("ObjectList is not encodable");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_kind<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnsupportedKind(s.into());
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidArgument`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_argument<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidArgument(s.into());
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::BufferCapacity`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_capacity(required: usize, capacity: usize) -> Self {
        let err = Error::BufferCapacity(required, capacity);
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::BufferOutOfBound`].
    ///
    /// ```
    /// use tiny_core::error::Error;
    ///
    /// let err = Error::buffer_out_of_bound(10, 4, 12);
    /// assert_eq!(err.to_string(), "buffer out of bound: 10 + 4 > 12");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, len: usize) -> Self {
        let err = Error::BufferOutOfBound(offset, length, len);
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidData`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidData(s.into());
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodingError`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodingError(s.into());
        if PANIC_ON_ERROR {
            panic!("TINY_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Unsupported-kind error naming the offending type.
    #[inline(never)]
    #[track_caller]
    pub fn unsupported_type<T: ?Sized + 'static>(what: &str) -> Error {
        Error::unsupported_kind(format!(
            "{} is not supported for `{}`",
            what,
            std::any::type_name::<T>()
        ))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```
/// use tiny_core::ensure;
/// use tiny_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n <= 4, Error::invalid_argument("too long"));
///     ensure!(n > 0, "length {} must be positive", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::UnsupportedKind`].
///
/// ```
/// use tiny_core::bail_unsupported;
/// use tiny_core::error::Error;
///
/// fn encode_object() -> Result<(), Error> {
///     bail_unsupported!("object graphs are not encodable");
/// }
/// ```
#[macro_export]
macro_rules! bail_unsupported {
    ($err:expr) => {
        return Err($crate::error::Error::unsupported_kind($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unsupported_kind(format!($fmt, $($arg)*)))
    };
}
