//! `createsuperuser`: create an administrator account without prompting
//!
//! Values come from flags first, then from the environment. A missing
//! password leaves the account with an unusable password.

use crate::commands::parse_args;
use crate::password::{hash_password, UNUSABLE_PASSWORD};
use clap::Parser;
use setup_tools_core::errors::{ExError, ExErrorKind};
use setup_tools_core::{Handler, ManagementCommand};
use setup_tools_store::repo::{NewUser, UserRepo};
use setup_tools_store::Database;
use std::rc::Rc;

pub const USERNAME_VAR: &str = "SETUP_TOOLS_SUPERUSER_USERNAME";
pub const EMAIL_VAR: &str = "SETUP_TOOLS_SUPERUSER_EMAIL";
pub const PASSWORD_VAR: &str = "SETUP_TOOLS_SUPERUSER_PASSWORD";

#[derive(Parser, Debug)]
#[command(name = "createsuperuser")]
struct CreateSuperuserArgs {
    #[arg(long = "no-input", alias = "noinput")]
    _no_input: bool,

    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    email: Option<String>,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

pub struct CreateSuperuser {
    db: Rc<Database>,
    env: EnvLookup,
}

impl CreateSuperuser {
    /// Read fallback values from the process environment
    pub fn new(db: Rc<Database>) -> Self {
        Self::with_env(db, |key| std::env::var(key).ok())
    }

    /// Read fallback values through `lookup`
    pub fn with_env(db: Rc<Database>, lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            db,
            env: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|v| !v.is_empty())
    }
}

impl ManagementCommand for CreateSuperuser {
    fn name(&self) -> &str {
        "createsuperuser"
    }

    fn help(&self) -> &str {
        "Create a superuser from flags or SETUP_TOOLS_SUPERUSER_* variables"
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> Result<(), ExError> {
        let args = parse_args::<CreateSuperuserArgs>(self.name(), args)?;

        let username = args
            .username
            .filter(|u| !u.is_empty())
            .or_else(|| self.var(USERNAME_VAR))
            .ok_or_else(|| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("createsuperuser")
                    .with_message(format!(
                        "You must use --username or set {} when running non-interactively.",
                        USERNAME_VAR
                    ))
            })?;
        let email = args
            .email
            .or_else(|| self.var(EMAIL_VAR))
            .unwrap_or_default();

        let password_hash = match self.var(PASSWORD_VAR) {
            Some(password) => hash_password(&password)?,
            None => {
                handler.warning(format!(
                    "{} is not set; the account has an unusable password.",
                    PASSWORD_VAR
                ));
                UNUSABLE_PASSWORD.to_string()
            }
        };

        let user = NewUser {
            username,
            email,
            password_hash,
            is_superuser: true,
        };
        self.db.with_conn(|conn| UserRepo::create(conn, &user))?;

        tracing::info!(username = %user.username, "superuser created");
        handler.success("Superuser created successfully.");
        Ok(())
    }
}
