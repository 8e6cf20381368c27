use std::io::{self, BufRead, Write};
use tracing::info;
use user_admin_domain::User;
use user_admin_infra::{IDialogs, INavigator, Route};
use user_admin_pages::{job_options, TextField, UserForm, UserListPage};

/// Asks on stderr and reads the answer from stdin
pub struct TerminalDialogs {
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl IDialogs for TerminalDialogs {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", question)
            .and_then(|_| stderr.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// There are no screens to switch between in a terminal, the route is only
/// logged.
pub struct LoggingNavigator;

impl INavigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {:?}", route);
    }
}

pub fn print_user_table(page: &UserListPage) {
    println!(
        "{:<6} {:<32} {:<32} {:<18} {:<10} ACTIVE",
        "ID", "NAME", "ADDRESS", "TELEPHONE", "JOB"
    );
    for user in page.visible_slice() {
        println!(
            "{:<6} {:<32} {:<32} {:<18} {:<10} {}",
            user.id,
            user.full_name(),
            user.address,
            user.telephone,
            user.job.label(),
            if user.active { "yes" } else { "no" }
        );
    }
    let pages = page
        .page_numbers()
        .map(|n| {
            if n == page.current_page() {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("Page {}  ({} users)", pages, page.users().len());
}

pub fn print_user(user: &User) {
    println!("ID:        {}", user.id);
    println!("Name:      {}", user.full_name());
    println!("Address:   {}", user.address);
    println!("Telephone: {}", user.telephone);
    println!("Job:       {}", user.job.label());
    println!("Active:    {}", if user.active { "yes" } else { "no" });
}

pub fn print_jobs() {
    for option in job_options() {
        println!("{:<10} {}", option.value, option.label);
    }
}

/// Prints the message of every field that failed validation
pub fn print_form_errors(form: &UserForm) {
    for field in TextField::ALL.iter() {
        if form.field(*field).is_invalid_and_touched() {
            eprintln!("{}: {}", field.name(), form.error_message(*field));
        }
    }
}
