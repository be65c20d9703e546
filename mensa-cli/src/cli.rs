use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mensa", version, about = "Cafeteria survey platform client")]
pub struct Cli {
    /// Base URL of the API (overrides MENSA_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Disable colored prompts and output.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token
    Login {
        username: String,
    },
    /// Forget the stored session
    Logout,
    /// Create a new account
    Register {
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Password reset and change flows
    #[command(subcommand)]
    Password(PasswordCommand),
    /// Browse surveys and their results
    #[command(subcommand)]
    Surveys(SurveysCommand),
    /// Fill out a survey interactively
    Fill {
        survey_id: u64,
    },
    /// Manage your submitted responses
    #[command(subcommand)]
    Responses(ResponsesCommand),
    /// Staff-only management commands
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub enum PasswordCommand {
    /// Request a password reset email
    ResetRequest {
        #[arg(long)]
        email: String,
    },
    /// Complete a password reset with the emailed uid and token
    ResetConfirm {
        uid: String,
        token: String,
    },
    /// Change the password of the logged-in account
    Change,
}

#[derive(Debug, Subcommand)]
pub enum SurveysCommand {
    /// List surveys, optionally filtered by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one survey with its questions
    Show {
        id: u64,
    },
    /// Show aggregated results for a survey
    Results {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum ResponsesCommand {
    /// List your submitted responses
    List,
    /// Re-open a response and edit the answers
    Edit {
        id: u64,
    },
    /// Delete a response
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    #[command(subcommand)]
    Survey(AdminSurveyCommand),
    #[command(subcommand)]
    Question(AdminQuestionCommand),
    #[command(subcommand)]
    User(AdminUserCommand),
}

#[derive(Debug, Subcommand)]
pub enum AdminSurveyCommand {
    /// Create a survey
    New {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Create the survey in an inactive state
        #[arg(long)]
        inactive: bool,
    },
    /// Update title, description, or active state
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a survey and its questions
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminQuestionCommand {
    /// Add a question to a survey
    Add {
        survey_id: u64,
        text: String,
        /// One of: text, choice, multiple, star, date, scale
        #[arg(long = "type")]
        kind: String,
        /// Comma-separated options (choice/multiple only)
        #[arg(long, default_value = "")]
        options: String,
        #[arg(long, default_value_t = 0)]
        order: i64,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        required: bool,
    },
    /// Update fields of an existing question
    Update {
        id: u64,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        options: Option<String>,
        #[arg(long)]
        order: Option<i64>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        required: Option<bool>,
    },
    /// Delete a question
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminUserCommand {
    /// List all accounts
    List,
    /// Create an account
    Add {
        username: String,
        #[arg(long)]
        email: String,
        /// Grant staff permissions
        #[arg(long)]
        staff: bool,
    },
    /// Update an account
    Update {
        id: u64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        staff: Option<bool>,
        /// Prompt for a new password
        #[arg(long)]
        password: bool,
    },
    /// Delete an account
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fill() {
        let cli = Cli::try_parse_from(["mensa", "fill", "3"]).unwrap();
        assert!(matches!(cli.command, Command::Fill { survey_id: 3 }));
    }

    #[test]
    fn parses_surveys_list_with_search() {
        let cli = Cli::try_parse_from(["mensa", "surveys", "list", "--search", "yemek"]).unwrap();
        match cli.command {
            Command::Surveys(SurveysCommand::List { search }) => {
                assert_eq!(search.as_deref(), Some("yemek"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
