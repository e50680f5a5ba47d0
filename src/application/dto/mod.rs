pub mod answers;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod questions;
pub mod serde_time;
pub mod tags;
pub mod users;
pub mod votes;

pub use answers::{AnswerDto, AnswerListDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use pagination::PageParams;
pub use questions::{QuestionDto, QuestionListDto};
pub use tags::{TagDto, TagListDto};
pub use users::{UserDto, UserListDto, UserSummaryDto};
pub use votes::{PostRefDto, VoteDto, VoteTallyDto};
