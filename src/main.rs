mod telemetry;
mod terminal;

use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use telemetry::{get_subscriber, init_subscriber};
use terminal::{
    print_form_errors, print_jobs, print_user, print_user_table, LoggingNavigator,
    TerminalDialogs,
};
use user_admin_domain::{Job, ID};
use user_admin_infra::setup_context;
use user_admin_pages::{
    CreateUserPage, DeleteOutcome, EditUserPage, LoadOutcome, Rejection, SubmitOutcome,
    TextField, UserForm, UserListPage,
};

/// `user_admin` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "user_admin",
    about = "List, create, edit and delete the users of a users API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the users one page at a time.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a single user.
    Show { id: ID },
    /// List the selectable jobs.
    Jobs,
    /// Create a new user.
    Create {
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[command(flatten)]
        details: DetailArgs,
    },
    /// Replace the fields of an existing user. Omitted fields keep their value.
    Edit {
        id: ID,
        #[arg(long)]
        firstname: Option<String>,
        #[arg(long)]
        lastname: Option<String>,
        #[command(flatten)]
        details: DetailArgs,
        #[arg(long, value_name = "true|false")]
        active: Option<bool>,
    },
    /// Delete a user after confirmation.
    Delete {
        id: ID,
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct DetailArgs {
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    telephone: Option<String>,
    /// One of the names printed by `jobs`.
    #[arg(long)]
    job: Option<Job>,
}

impl DetailArgs {
    fn apply(self, form: &mut UserForm) {
        if let Some(address) = self.address {
            form.set(TextField::Address, address);
        }
        if let Some(telephone) = self.telephone {
            form.set(TextField::Telephone, telephone);
        }
        if let Some(job) = self.job {
            form.job = job;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("user_admin".into(), "warn".into());
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let ctx = setup_context(
        Arc::new(TerminalDialogs::new(assume_yes)),
        Arc::new(LoggingNavigator),
    );

    match cli.command {
        Command::List { page: page_number } => {
            let mut page = UserListPage::new(ctx);
            load_list(&mut page).await?;
            if !page.page(page_number) {
                bail!(
                    "Page {} does not exist, there are {} pages",
                    page_number,
                    page.total_pages()
                );
            }
            print_user_table(&page);
        }
        Command::Show { id } => {
            let page = load_edit_page(EditUserPage::new(ctx, id)).await?;
            if let Some(user) = page.current_user() {
                print_user(user);
            }
        }
        Command::Jobs => print_jobs(),
        Command::Create {
            firstname,
            lastname,
            details,
        } => {
            let mut page = CreateUserPage::new(ctx);
            let form = page.form_mut();
            form.set(TextField::Firstname, firstname);
            form.set(TextField::Lastname, lastname);
            details.apply(form);
            let outcome = page.submit().await;
            finish(outcome, page.form())?;
        }
        Command::Edit {
            id,
            firstname,
            lastname,
            details,
            active,
        } => {
            let mut page = load_edit_page(EditUserPage::new(ctx, id)).await?;
            let form = page.form_mut();
            if let Some(firstname) = firstname {
                form.set(TextField::Firstname, firstname);
            }
            if let Some(lastname) = lastname {
                form.set(TextField::Lastname, lastname);
            }
            details.apply(form);
            if let Some(active) = active {
                form.active = active;
            }
            let outcome = page.submit().await;
            finish(outcome, page.form())?;
        }
        Command::Delete { id, .. } => {
            let mut page = load_edit_page(EditUserPage::new(ctx, id)).await?;
            match page.delete().await {
                DeleteOutcome::Deleted => println!("Deleted user {}", id),
                DeleteOutcome::Rejected(Rejection::Declined) => println!("Nothing was deleted"),
                DeleteOutcome::Rejected(rejection) => bail!("Delete rejected: {:?}", rejection),
                DeleteOutcome::Failed(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

async fn load_list(page: &mut UserListPage) -> anyhow::Result<()> {
    match page.reload().await {
        LoadOutcome::Loaded(_) => Ok(()),
        LoadOutcome::Failed(e) => Err(e.into()),
        LoadOutcome::Rejected(rejection) => Err(anyhow!("Reload rejected: {:?}", rejection)),
    }
}

async fn load_edit_page(mut page: EditUserPage) -> anyhow::Result<EditUserPage> {
    match page.load().await {
        LoadOutcome::Loaded(_) => Ok(page),
        LoadOutcome::Failed(e) => Err(e.into()),
        LoadOutcome::Rejected(rejection) => Err(anyhow!("Load rejected: {:?}", rejection)),
    }
}

fn finish(outcome: SubmitOutcome, form: &UserForm) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Saved(user) => {
            print_user(&user);
            Ok(())
        }
        SubmitOutcome::Rejected(Rejection::Invalid) => {
            print_form_errors(form);
            bail!("The user was not saved, some fields are invalid")
        }
        SubmitOutcome::Rejected(rejection) => bail!("Submit rejected: {:?}", rejection),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}
