use std::{num::NonZeroUsize, sync::Arc};
use user_admin_domain::User;
use user_admin_infra::{
    AdminContext, Config, InMemoryUserGateway, RecordingNavigator, StubDialogs,
};

/// A context together with handles on its stubs
pub(crate) struct TestContext {
    pub ctx: AdminContext,
    pub users: Arc<InMemoryUserGateway>,
    pub dialogs: Arc<StubDialogs>,
    pub navigator: Arc<RecordingNavigator>,
}

pub(crate) fn setup(users: Vec<User>, confirm: bool) -> TestContext {
    let config = Config {
        api_url: "http://localhost:8080/api/users".into(),
        page_size: NonZeroUsize::new(5).unwrap(),
    };
    let users = Arc::new(InMemoryUserGateway::with_users(users));
    let dialogs = Arc::new(StubDialogs::new(confirm));
    let navigator = Arc::new(RecordingNavigator::new());
    let ctx = AdminContext::new(
        config,
        users.clone(),
        dialogs.clone(),
        navigator.clone(),
    );
    TestContext {
        ctx,
        users,
        dialogs,
        navigator,
    }
}
