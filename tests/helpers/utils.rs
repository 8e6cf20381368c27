use std::{num::NonZeroUsize, sync::Arc};
use user_admin_infra::{
    AdminContext, Config, HttpUserGateway, RecordingNavigator, StubDialogs,
};
use user_admin_sdk::{CreateUserInput, Job, User};

pub fn create_input(firstname: &str, lastname: &str) -> CreateUserInput {
    CreateUserInput {
        firstname: firstname.into(),
        lastname: lastname.into(),
        address: "Budapest".into(),
        telephone: "+36 1 234 5678".into(),
        job: Job::Baker,
    }
}

pub fn user_ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id.inner()).collect()
}

/// A page context talking to the users API at `address` over http
pub struct HttpContext {
    pub ctx: AdminContext,
    pub dialogs: Arc<StubDialogs>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn http_context(address: &str, confirm: bool) -> HttpContext {
    let config = Config {
        api_url: address.to_string(),
        page_size: NonZeroUsize::new(5).expect("5 is not zero"),
    };
    let dialogs = Arc::new(StubDialogs::new(confirm));
    let navigator = Arc::new(RecordingNavigator::new());
    let ctx = AdminContext::new(
        config,
        Arc::new(HttpUserGateway::new(address)),
        dialogs.clone(),
        navigator.clone(),
    );
    HttpContext {
        ctx,
        dialogs,
        navigator,
    }
}
