//! # memo-service
//!
//! Application layer containing services and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ErrorKind, MemoCommentService, MemoRelationService, MemoService, NestService,
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
