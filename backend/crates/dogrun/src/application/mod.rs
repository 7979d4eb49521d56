//! Application Layer
//!
//! Use cases orchestrating the domain and repositories.

pub mod config;
pub mod dogs;
pub mod entry;
pub mod events;
pub mod identify;
pub mod login;
pub mod notices;
pub mod posts;
pub mod profile;
pub mod register;
pub mod tags;

// Re-exports
pub use config::DogrunConfig;
pub use dogs::{
    AddDogUseCase, DeleteDogUseCase, DogInput, ListDogsUseCase, PhotoUpload, UpdateDogUseCase,
    UploadDogPhotoUseCase,
};
pub use entry::{IssueEntryPassUseCase, IssuedEntryPass, ScanEntryPassUseCase};
pub use events::{CalendarUseCase, ListEventsUseCase};
pub use identify::IdentifyCallerUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use notices::{ListNoticesUseCase, MarkNoticeReadUseCase};
pub use posts::{AddCommentUseCase, CreatePostInput, CreatePostUseCase, LikePostUseCase, ListPostsUseCase};
pub use profile::{UpdateProfileInput, UpdateProfileUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use tags::ListTagsUseCase;
