use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::ProfileRepository;
use crate::domain::services::auth_service::AuthService;
use crate::domain::store::MentorshipStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<MentorshipStore>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub auth_service: Arc<AuthService>,
}
