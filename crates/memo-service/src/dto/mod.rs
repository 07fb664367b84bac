//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - Response DTOs for serializing service outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateMemoCommentRequest, CreateMemoRequest, CreateNestRequest, CreateReactionRequest,
    ListQuery, MemoRelationRequest, UpdateMemoCommentRequest, UpdateMemoRequest,
    UpdateNestRequest, DEFAULT_LIST_LIMIT, MAX_CONTENT_LENGTH, MAX_LIST_LIMIT,
};

pub use responses::{
    MemoCommentResponse, MemoRelationResponse, MemoResponse, NestResponse, PageMeta,
    PageResponse, ReactionResponse,
};
