mod auth;
mod post;

pub use auth::{
    ForgotPasswordRequest, GetUserResponse, LoginRequest, LoginResponse, MessageResponse,
    SignUpRequest, UpdateProfileRequest, UpdateProfileResponse, UserData, VerifyOtpRequest,
};
pub use post::{CommunityPost, CreatePostRequest, FeedEntry, share_post_content};
