use crate::shared::{
    feedback::surface_error,
    outcome::{DeleteOutcome, LoadOutcome, Rejection},
};
use std::ops::RangeInclusive;
use tracing::instrument;
use user_admin_domain::{Paginator, User, ID};
use user_admin_infra::{AdminContext, GatewayError, Route};

/// Paginated list of all users.
///
/// The whole collection is fetched at once and paginated in memory.
pub struct UserListPage {
    ctx: AdminContext,
    users: Paginator<User>,
    loading: bool,
    deleting: bool,
}

impl UserListPage {
    pub fn new(ctx: AdminContext) -> Self {
        let users = Paginator::new(ctx.config.page_size);
        Self {
            ctx,
            users,
            loading: false,
            deleting: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_reload(&mut self) -> Result<(), Rejection> {
        if self.loading {
            return Err(Rejection::Busy);
        }
        self.loading = true;
        Ok(())
    }

    /// Replaces the users with a freshly fetched collection. A failed fetch
    /// keeps the users that were shown before.
    pub fn finish_reload(&mut self, res: Result<Vec<User>, GatewayError>) -> LoadOutcome {
        self.loading = false;
        match res {
            Ok(users) => {
                let count = users.len();
                self.users.replace(users);
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                surface_error(&self.ctx, "An error occurred while loading the users!", &e);
                LoadOutcome::Failed(e)
            }
        }
    }

    #[instrument(name = "Reloading user list", skip(self))]
    pub async fn reload(&mut self) -> LoadOutcome {
        if let Err(rejection) = self.begin_reload() {
            return LoadOutcome::Rejected(rejection);
        }
        let res = self.ctx.users.list_all().await;
        self.finish_reload(res)
    }

    /// Goes to page `page`, returns false if there is no such page
    pub fn page(&mut self, page: usize) -> bool {
        self.users.go_to(page)
    }

    pub fn visible_slice(&self) -> &[User] {
        self.users.visible()
    }

    pub fn current_page(&self) -> usize {
        self.users.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.users.total_pages()
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.users.page_numbers()
    }

    pub fn users(&self) -> &[User] {
        self.users.items()
    }

    /// Deletes `user` after the user confirmed it and reloads the list
    #[instrument(name = "Deleting from user list", skip(self, user), fields(user_id = %user.id))]
    pub async fn delete_user(&mut self, user: &User) -> DeleteOutcome {
        if self.deleting || self.loading {
            return DeleteOutcome::Rejected(Rejection::Busy);
        }
        let question = format!(
            "Are you sure you want to delete the following user: {}?",
            user.full_name()
        );
        if !self.ctx.dialogs.confirm(&question) {
            return DeleteOutcome::Rejected(Rejection::Declined);
        }

        self.deleting = true;
        let res = self.ctx.users.delete(user.id).await;
        self.deleting = false;
        match res {
            Ok(()) => {
                self.reload().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                surface_error(&self.ctx, "An error occurred while deleting the user!", &e);
                DeleteOutcome::Failed(e)
            }
        }
    }

    pub fn navigate_to_create(&self) {
        self.ctx.navigator.navigate(Route::CreateUser);
    }

    pub fn navigate_to_edit(&self, user_id: ID) {
        self.ctx.navigator.navigate(Route::EditUser(user_id));
    }
}
