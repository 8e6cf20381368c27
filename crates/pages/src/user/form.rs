use user_admin_api_structs::{create_user, update_user};
use user_admin_domain::{
    error_message,
    validation::{CONTACT_RULES, NAME_RULES},
    FieldErrors, FieldRules, Job, User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Firstname,
    Lastname,
    Address,
    Telephone,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::Firstname,
        TextField::Lastname,
        TextField::Address,
        TextField::Telephone,
    ];

    /// Field name as used by the users API
    pub fn name(&self) -> &'static str {
        match self {
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Address => "address",
            Self::Telephone => "telephone",
        }
    }

    fn rules(&self) -> FieldRules {
        match self {
            Self::Firstname | Self::Lastname => NAME_RULES,
            Self::Address | Self::Telephone => CONTACT_RULES,
        }
    }
}

/// State of one text input. Errors are computed from the current value on
/// every call.
#[derive(Debug, Clone)]
pub struct FormField {
    value: String,
    touched: bool,
    rules: FieldRules,
}

impl FormField {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            value: String::new(),
            touched: false,
            rules,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The input lost focus
    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn errors(&self) -> FieldErrors {
        self.rules.check(&self.value)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn is_invalid_and_touched(&self) -> bool {
        self.touched && !self.is_valid()
    }

    pub fn error_message(&self) -> String {
        error_message(&self.errors(), self.touched)
    }

    fn trimmed(&self) -> String {
        self.value.trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options of the job select, in declaration order
pub fn job_options() -> Vec<SelectOption> {
    Job::ALL
        .iter()
        .map(|job| SelectOption {
            value: job.as_wire_name(),
            label: job.label(),
        })
        .collect()
}

/// Fields shared by the create and the edit page
#[derive(Debug, Clone)]
pub struct UserForm {
    firstname: FormField,
    lastname: FormField,
    address: FormField,
    telephone: FormField,
    pub job: Job,
    pub active: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            firstname: FormField::new(TextField::Firstname.rules()),
            lastname: FormField::new(TextField::Lastname.rules()),
            address: FormField::new(TextField::Address.rules()),
            telephone: FormField::new(TextField::Telephone.rules()),
            job: Job::default(),
            active: true,
        }
    }

    pub fn field(&self, field: TextField) -> &FormField {
        match field {
            TextField::Firstname => &self.firstname,
            TextField::Lastname => &self.lastname,
            TextField::Address => &self.address,
            TextField::Telephone => &self.telephone,
        }
    }

    pub fn field_mut(&mut self, field: TextField) -> &mut FormField {
        match field {
            TextField::Firstname => &mut self.firstname,
            TextField::Lastname => &mut self.lastname,
            TextField::Address => &mut self.address,
            TextField::Telephone => &mut self.telephone,
        }
    }

    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        self.field_mut(field).set(value);
    }

    pub fn blur(&mut self, field: TextField) {
        self.field_mut(field).blur();
    }

    pub fn error_message(&self, field: TextField) -> String {
        self.field(field).error_message()
    }

    pub fn is_valid(&self) -> bool {
        TextField::ALL.iter().all(|f| self.field(*f).is_valid())
    }

    /// Marks every invalid field as touched so that its error shows up
    pub fn mark_invalid_touched(&mut self) {
        for field in TextField::ALL.iter() {
            let field = self.field_mut(*field);
            if !field.is_valid() {
                field.mark_touched();
            }
        }
    }

    /// Fills the form with an existing record
    pub fn patch_from(&mut self, user: &User) {
        self.firstname.set(user.firstname.clone());
        self.lastname.set(user.lastname.clone());
        self.address.set(user.address.clone());
        self.telephone.set(user.telephone.clone());
        self.job = user.job;
        self.active = user.active;
    }

    pub fn to_create_dto(&self) -> create_user::RequestBody {
        create_user::RequestBody {
            firstname: self.firstname.trimmed(),
            lastname: self.lastname.trimmed(),
            address: self.address.trimmed(),
            telephone: self.telephone.trimmed(),
            job: self.job,
        }
    }

    pub fn to_update_dto(&self) -> update_user::RequestBody {
        update_user::RequestBody {
            firstname: self.firstname.trimmed(),
            lastname: self.lastname.trimmed(),
            address: self.address.trimmed(),
            telephone: self.telephone.trimmed(),
            job: self.job,
            active: self.active,
        }
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}
