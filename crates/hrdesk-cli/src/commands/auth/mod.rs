//! Authentication subcommands.

mod login;
mod logout;
mod routes;
mod signup;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Settings;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and save the session
    Login(login::LoginArgs),

    /// Create an account (does not log in)
    Signup(signup::SignupArgs),

    /// Forget the saved session
    Logout(logout::LogoutArgs),

    /// Display the logged-in user
    Whoami(whoami::WhoamiArgs),

    /// List the sections the logged-in user may open
    Routes(routes::RoutesArgs),
}

pub async fn handle(cmd: AuthCommand, settings: &Settings) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, settings).await,
        AuthSubcommand::Signup(args) => signup::run(args, settings).await,
        AuthSubcommand::Logout(args) => logout::run(args, settings).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, settings).await,
        AuthSubcommand::Routes(args) => routes::run(args, settings).await,
    }
}
