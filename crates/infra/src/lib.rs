mod config;
mod gateway;
mod system;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::Config;
pub use gateway::{
    GatewayCall, GatewayError, HttpUserGateway, IUserGateway, InMemoryUserGateway,
};
use std::sync::Arc;
pub use system::{IDialogs, INavigator, RecordingNavigator, Route, StubDialogs};

#[derive(Clone)]
pub struct AdminContext {
    pub users: Arc<dyn IUserGateway>,
    pub dialogs: Arc<dyn IDialogs>,
    pub navigator: Arc<dyn INavigator>,
    pub config: Config,
}

impl AdminContext {
    pub fn new(
        config: Config,
        users: Arc<dyn IUserGateway>,
        dialogs: Arc<dyn IDialogs>,
        navigator: Arc<dyn INavigator>,
    ) -> Self {
        Self {
            users,
            dialogs,
            navigator,
            config,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context(dialogs: Arc<dyn IDialogs>, navigator: Arc<dyn INavigator>) -> AdminContext {
    let config = Config::new();
    let users = Arc::new(HttpUserGateway::new(&config.api_url));
    AdminContext::new(config, users, dialogs, navigator)
}
