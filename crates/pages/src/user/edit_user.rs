use crate::{
    shared::{
        feedback::surface_error,
        outcome::{DeleteOutcome, FormState, LoadOutcome, Rejection, SubmitOutcome},
    },
    user::form::UserForm,
};
use tracing::instrument;
use user_admin_api_structs::update_user::RequestBody;
use user_admin_domain::{User, ID};
use user_admin_infra::{AdminContext, GatewayError, Route};

/// Page for editing or deleting an existing user
pub struct EditUserPage {
    ctx: AdminContext,
    user_id: ID,
    current_user: Option<User>,
    form: UserForm,
    state: FormState,
    deleting: bool,
}

impl EditUserPage {
    pub fn new(ctx: AdminContext, user_id: ID) -> Self {
        Self {
            ctx,
            user_id,
            current_user: None,
            form: UserForm::new(),
            state: FormState::Loading,
            deleting: false,
        }
    }

    pub fn user_id(&self) -> ID {
        self.user_id
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
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

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn is_busy(&self) -> bool {
        self.is_submitting() || self.deleting
    }

    /// Fetches the user and fills the form with it. When the user can not be
    /// loaded the page tells the user and goes back to the list.
    #[instrument(name = "Loading edit user page", skip(self), fields(user_id = %self.user_id))]
    pub async fn load(&mut self) -> LoadOutcome {
        if self.is_busy() {
            return LoadOutcome::Rejected(Rejection::Busy);
        }
        self.state = FormState::Loading;
        match self.ctx.users.get(self.user_id).await {
            Ok(user) => {
                self.form.patch_from(&user);
                self.current_user = Some(user);
                self.state = FormState::Editing;
                LoadOutcome::Loaded(1)
            }
            Err(e) => {
                self.current_user = None;
                surface_error(&self.ctx, "An error occurred while loading the user!", &e);
                self.ctx.navigator.navigate(Route::UserList);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// First half of a submit, see `CreateUserPage::prepare_submit`
    pub fn prepare_submit(&mut self) -> Result<RequestBody, Rejection> {
        if self.is_busy() {
            return Err(Rejection::Busy);
        }
        if self.current_user.is_none() || self.state == FormState::Loading {
            return Err(Rejection::NotLoaded);
        }
        if !self.form.is_valid() {
            self.form.mark_invalid_touched();
            return Err(Rejection::Invalid);
        }
        self.state = FormState::Submitting;
        Ok(self.form.to_update_dto())
    }

    pub fn finish_submit(&mut self, res: Result<User, GatewayError>) -> SubmitOutcome {
        self.state = FormState::Editing;
        match res {
            Ok(user) => {
                self.current_user = Some(user.clone());
                self.ctx.navigator.navigate(Route::UserList);
                SubmitOutcome::Saved(user)
            }
            Err(e) => {
                surface_error(&self.ctx, "An error occurred while updating the user!", &e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    #[instrument(name = "Submitting edit user page", skip(self), fields(user_id = %self.user_id))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let body = match self.prepare_submit() {
            Ok(body) => body,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let res = self.ctx.users.update(self.user_id, body).await;
        self.finish_submit(res)
    }

    /// First half of a delete: asks the user to confirm. On success the page
    /// is deleting until `finish_delete`.
    pub fn prepare_delete(&mut self) -> Result<ID, Rejection> {
        if self.is_busy() {
            return Err(Rejection::Busy);
        }
        let user = match &self.current_user {
            Some(user) => user,
            None => return Err(Rejection::NotLoaded),
        };
        let question = format!(
            "Are you sure you want to delete the following user: {}?",
            user.full_name()
        );
        if !self.ctx.dialogs.confirm(&question) {
            return Err(Rejection::Declined);
        }
        self.deleting = true;
        Ok(self.user_id)
    }

    pub fn finish_delete(&mut self, res: Result<(), GatewayError>) -> DeleteOutcome {
        self.deleting = false;
        match res {
            Ok(()) => {
                self.ctx.navigator.navigate(Route::UserList);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                surface_error(&self.ctx, "An error occurred while deleting the user!", &e);
                DeleteOutcome::Failed(e)
            }
        }
    }

    #[instrument(name = "Deleting from edit user page", skip(self), fields(user_id = %self.user_id))]
    pub async fn delete(&mut self) -> DeleteOutcome {
        let user_id = match self.prepare_delete() {
            Ok(user_id) => user_id,
            Err(rejection) => return DeleteOutcome::Rejected(rejection),
        };
        let res = self.ctx.users.delete(user_id).await;
        self.finish_delete(res)
    }

    pub fn cancel(&self) {
        self.ctx.navigator.navigate(Route::UserList);
    }
}
