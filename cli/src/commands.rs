//! Subcommand implementations.

use anyhow::Context;

use baselingo_ledger::{compute_withdrawable, yield_for, DepositLedger, YIELD_RATE};
use baselingo_lesson::{AnswerOutcome, Lesson, LessonSession};
use baselingo_miniapp::{LogHaptics, StdoutPoster};
use baselingo_store_lmdb::{LmdbEnvironment, LmdbKeyValueStore};
use baselingo_wallet_core::{
    load_key_file, save_key_file, KeyFile, LocalSigner, SystemClock, Vault, WalletError,
};

use crate::config::AppConfig;

type CliVault = Vault<LmdbKeyValueStore, LocalSigner, LogHaptics, SystemClock>;

fn open_store(config: &AppConfig) -> anyhow::Result<LmdbEnvironment> {
    let path = config.store_path();
    LmdbEnvironment::open(&path, config.map_size_bytes())
        .with_context(|| format!("opening local store at {}", path.display()))
}

fn open_vault(config: &AppConfig, env: &LmdbEnvironment) -> anyhow::Result<CliVault> {
    let key_path = config.key_file_path();
    let key_file = load_key_file(&key_path).with_context(|| {
        format!(
            "loading key file {} (run `baselingo keygen` to create one)",
            key_path.display()
        )
    })?;
    let signer = LocalSigner::from_key_file(&key_file)?;
    tracing::debug!(public_key = %signer.public_key(), "signer ready");
    Ok(Vault::new(env.kv_store(), signer, LogHaptics, SystemClock)
        .with_min_deposit(config.min_deposit))
}

pub fn status(config: &AppConfig) -> anyhow::Result<()> {
    let env = open_store(config)?;
    let ledger = DepositLedger::new(env.kv_store());
    let current = ledger.load()?;

    match current {
        Some(ref deposit) => {
            println!("Current deposit: {} €", deposit.amount);
            println!("Deposited at:    {}", deposit.deposited_at);
            println!(
                "Yield ({}%):      {} €",
                YIELD_RATE * 100.0,
                yield_for(deposit.amount)
            );
            println!("Withdrawable:    {} €", compute_withdrawable(Some(deposit)));
        }
        None => println!("Current deposit: 0.00 €"),
    }
    Ok(())
}

pub async fn deposit(config: &AppConfig, amount: f64) -> anyhow::Result<()> {
    let env = open_store(config)?;
    let vault = open_vault(config, &env)?;

    match vault.deposit(amount).await {
        Ok(deposit) => {
            println!(
                "Deposited {} € at {}",
                deposit.record.amount, deposit.record.deposited_at
            );
            println!("Signature: {}", deposit.signature);
            Ok(())
        }
        Err(e @ WalletError::Signing(_)) => Err(e).context("sign failed"),
        Err(e) => Err(e.into()),
    }
}

pub async fn withdraw(config: &AppConfig) -> anyhow::Result<()> {
    let env = open_store(config)?;
    let vault = open_vault(config, &env)?;

    match vault.withdraw().await {
        Ok(Some(withdrawal)) => {
            println!("Withdrew {} € (mock)", withdrawal.withdrawable);
            println!("Signature: {}", withdrawal.signature);
            Ok(())
        }
        Ok(None) => {
            println!("No active deposit.");
            Ok(())
        }
        Err(e @ WalletError::Signing(_)) => Err(e).context("withdraw sign failed"),
        Err(e) => Err(e.into()),
    }
}

pub fn keygen(config: &AppConfig, force: bool) -> anyhow::Result<()> {
    let path = config.key_file_path();
    let key_file = KeyFile::generate()?;
    save_key_file(&key_file, &path, force)?;
    println!("Key file:   {}", path.display());
    println!("Public key: {}", key_file.public_key);
    Ok(())
}

pub fn show_config(config: &AppConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn print_lesson(lesson: &Lesson) {
    println!("Daily Lesson {}/{}", lesson.day, lesson.total_days);
    println!("Fill the blank: {}", lesson.prompt);
    println!("Options: {}", lesson.options.join(" / "));
}

pub fn lesson_show() -> anyhow::Result<()> {
    print_lesson(&Lesson::daily());
    Ok(())
}

pub fn lesson_answer(option: &str) -> anyhow::Result<()> {
    let mut session = LessonSession::new(Lesson::daily(), LogHaptics, StdoutPoster);
    match session.select(option)? {
        AnswerOutcome::Correct => println!("Correct!"),
        AnswerOutcome::Incorrect => println!("Not quite, try again."),
    }
    println!("Progress: {}%", session.progress());
    Ok(())
}

pub async fn lesson_share(answer: &str, sentence: Option<&str>) -> anyhow::Result<()> {
    let lesson = Lesson::daily();
    let sentence = sentence
        .map(str::to_string)
        .unwrap_or_else(|| lesson.example_sentence.clone());
    let mut session = LessonSession::new(lesson, LogHaptics, StdoutPoster);

    if session.select(answer)? == AnswerOutcome::Incorrect {
        println!("Not quite, try again.");
        return Ok(());
    }
    session.post_proof(&sentence).await.context("post failed")?;
    println!("Lesson complete! Progress: {}%", session.progress());
    Ok(())
}
