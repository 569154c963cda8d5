//
//  adacord-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Account commands: create, login, logout, password reset.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::{Input, Password};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::{CredentialStore, Credentials};
use crate::output::{OutputFormat, OutputWriter};

use super::GlobalOptions;

// Sanity check only; the server does the real validation.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Manage your account
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Create a new account
    Create,

    /// Log in and store the credential locally
    Login(LoginArgs),

    /// Remove the stored credential
    Logout,

    /// Request a password-reset mail
    ResetPassword(ResetPasswordArgs),

    /// Re-send the verification mail
    ResendVerification(ResendVerificationArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account e-mail address
    #[arg(long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Account e-mail address
    #[arg(long)]
    pub email: String,
}

#[derive(Args, Debug)]
pub struct ResendVerificationArgs {
    /// Account e-mail address
    #[arg(long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::Create => self.create(global).await,
            UserSubcommand::Login(args) => self.login(args, global).await,
            UserSubcommand::Logout => self.logout(global),
            UserSubcommand::ResetPassword(args) => self.reset_password(args, global).await,
            UserSubcommand::ResendVerification(args) => {
                self.resend_verification(args, global).await
            }
        }
    }

    /// Interactively register a new account
    async fn create(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        println!("Hey there 👋");

        let email: String = Input::new()
            .with_prompt("> What's your email?")
            .validate_with(|input: &String| {
                if EMAIL_RE.is_match(input) {
                    Ok(())
                } else {
                    Err("that doesn't look like an e-mail address")
                }
            })
            .interact_text()?;
        let password = Password::new()
            .with_prompt("> What's your password?")
            .with_confirmation("> Repeat it", "the passwords don't match")
            .interact()?;

        let api = global.api()?;
        api.user().create(&email, &password).await?;

        writer.success("Awesome, check your email to confirm your email address");
        Ok(())
    }

    /// Log in and persist the credential
    async fn login(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let password = match &args.password {
            Some(password) => password.clone(),
            None => Password::new().with_prompt("Password").interact()?,
        };

        let api = global.api()?;
        let session = api.user().login(&args.email, &password).await?;

        let store = CredentialStore::from_config_dir()?;
        store.save(&Credentials {
            email: args.email.clone(),
            token: session.access_token,
        })?;

        writer.success(&format!("Logged in as {}", args.email));
        Ok(())
    }

    /// Remove the stored credential
    fn logout(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let store = CredentialStore::from_config_dir()?;
        store.clear().context("could not remove the stored credential")?;

        writer.success("Logged out.");
        Ok(())
    }

    async fn reset_password(&self, args: &ResetPasswordArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;
        api.user().request_password_reset(&args.email).await?;

        writer.success("Check your inbox for the password-reset mail.");
        Ok(())
    }

    async fn resend_verification(
        &self,
        args: &ResendVerificationArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let password = match &args.password {
            Some(password) => password.clone(),
            None => Password::new().with_prompt("Password").interact()?,
        };

        let api = global.api()?;
        api.user()
            .request_verification_email(&args.email, &password)
            .await?;

        writer.success("Verification mail sent, check your inbox.");
        Ok(())
    }
}
