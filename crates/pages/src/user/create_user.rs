use crate::{
    shared::{
        feedback::surface_error,
        outcome::{FormState, Rejection, SubmitOutcome},
    },
    user::form::UserForm,
};
use tracing::instrument;
use user_admin_api_structs::create_user::RequestBody;
use user_admin_domain::User;
use user_admin_infra::{AdminContext, GatewayError, Route};

/// Page for creating a new user
pub struct CreateUserPage {
    ctx: AdminContext,
    form: UserForm,
    state: FormState,
}

impl CreateUserPage {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            form: UserForm::new(),
            state: FormState::Editing,
        }
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// First half of a submit: validates the form and builds the payload.
    ///
    /// An invalid form gets its invalid fields marked as touched and nothing
    /// is sent. On success the page is `Submitting` until `finish_submit`.
    pub fn prepare_submit(&mut self) -> Result<RequestBody, Rejection> {
        if self.is_submitting() {
            return Err(Rejection::Busy);
        }
        if !self.form.is_valid() {
            self.form.mark_invalid_touched();
            return Err(Rejection::Invalid);
        }
        self.state = FormState::Submitting;
        Ok(self.form.to_create_dto())
    }

    pub fn finish_submit(&mut self, res: Result<User, GatewayError>) -> SubmitOutcome {
        self.state = FormState::Editing;
        match res {
            Ok(user) => {
                self.ctx.navigator.navigate(Route::UserList);
                SubmitOutcome::Saved(user)
            }
            Err(e) => {
                surface_error(&self.ctx, "An error occurred while creating the user!", &e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    #[instrument(name = "Submitting create user page", skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let body = match self.prepare_submit() {
            Ok(body) => body,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let res = self.ctx.users.create(body).await;
        self.finish_submit(res)
    }

    pub fn cancel(&self) {
        self.ctx.navigator.navigate(Route::UserList);
    }
}
