// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![feature(error_generic_member_access)]

use std::backtrace::Backtrace;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// An error that the caller is not expected to handle in any way other than
/// logging it and aborting the operation it was part of.
#[derive(Error, Debug)]
#[error("Internal error")]
pub struct InternalError {
    #[source]
    source: BoxedError,
    context: Option<String>,
    backtrace: Backtrace,
}

impl InternalError {
    pub fn new<E: Into<BoxedError>>(e: E) -> Self {
        Self {
            source: e.into(),
            context: None,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn new_with_context<E: Into<BoxedError>>(e: E, context: impl Into<String>) -> Self {
        Self {
            source: e.into(),
            context: Some(context.into()),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn bail<T>(reason: impl Into<String>) -> Result<T, Self> {
        Err(Self::new(InternalErrorBail::new(reason)))
    }

    /// Human-readable rendition of the underlying cause, suitable for
    /// surfacing in operational reports
    pub fn reason(&self) -> String {
        match &self.context {
            None => format!("Internal error: {}", self.source),
            Some(context) => format!("Internal error: {} (context: {context})", self.source),
        }
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("{reason}")]
struct InternalErrorBail {
    reason: String,
}

impl InternalErrorBail {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ErrorIntoInternal {
    fn int_err(self) -> InternalError;

    fn context_int_err(self, context: impl Into<String>) -> InternalError;
}

impl<E> ErrorIntoInternal for E
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> InternalError {
        InternalError::new(self)
    }

    fn context_int_err(self, context: impl Into<String>) -> InternalError {
        InternalError::new_with_context(self, context)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ResultIntoInternal<OK> {
    fn int_err(self) -> Result<OK, InternalError>;

    fn context_int_err(self, context: impl Into<String>) -> Result<OK, InternalError>;
}

impl<OK, E> ResultIntoInternal<OK> for Result<OK, E>
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> Result<OK, InternalError> {
        self.map_err(ErrorIntoInternal::int_err)
    }

    fn context_int_err(self, context: impl Into<String>) -> Result<OK, InternalError> {
        self.map_err(|e| e.context_int_err(context))
    }
}
