//! End-to-end prompt sessions over in-memory channels
//!
//! These drive a single `Prompter` through several questions in a row, the
//! way an interactive program would, and check both the answers and what
//! the user saw.

use lineprompt::cli::{Answer, Commands, Runner};
use lineprompt::prompt::{ScriptedChannel, StreamChannel};
use lineprompt::{Error, PromptConfig, Prompter};
use std::io::Cursor;
use test_log::test;

#[test]
fn test_character_creation_session() {
    let channel = ScriptedChannel::with_responses([
        "Ash",
        "ten",
        "10",
        "0",
        "5",
        "1.5.0",
        "1.75",
        "sure",
        "yes",
    ]);
    let mut prompter = Prompter::new(channel);

    let name = prompter.prompt_line("Trainer name: ").unwrap();
    let age = prompter.prompt_int("Age: ").unwrap();
    let team = prompter.prompt_int_in_range("Team size", 1, 6).unwrap();
    let height = prompter.prompt_double_in_range("Height", 0.5, 2.5).unwrap();
    let ready = prompter.agree("Ready? ").unwrap();

    assert_eq!(name, "Ash");
    assert_eq!(age, 10);
    assert_eq!(team, 5);
    assert_eq!(height, 1.75);
    assert!(ready);

    let channel = prompter.into_channel();
    assert_eq!(channel.remaining(), 0);
    assert_eq!(
        channel.transcript(),
        "Trainer name: \
         Age: Bad int format!  Try again.\n\
         Age: \
         Team size (1 through 6) 0 is out of range!\n\
         Team size (1 through 6) \
         Height (0.5 through 2.5) Bad decimal format!  Try again.\n\
         Height (0.5 through 2.5) \
         Ready? Enter y or n!\n\
         Ready? "
    );
}

#[test]
fn test_piped_input_session() {
    let input = Cursor::new("  42  \r\n-3\n\nfalse\n");
    let mut prompter = Prompter::new(StreamChannel::new(input, Vec::new()));

    assert_eq!(prompter.prompt_int("a? ").unwrap(), 42);
    assert_eq!(prompter.prompt_int_in_range("b?", -3, 3).unwrap(), -3);
    assert!(!prompter.agree("c? ").unwrap());
    assert!(matches!(prompter.prompt_line("d? "), Err(Error::EndOfInput)));

    let (_, output) = prompter.into_channel().into_parts();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "a? b? (-3 through 3) c? Enter y or n!\nc? d? "
    );
}

#[test]
fn test_closed_input_stops_every_prompt() {
    let mut prompter = Prompter::new(StreamChannel::new(Cursor::new(""), Vec::new()));
    assert!(matches!(prompter.prompt_line("x"), Err(Error::EndOfInput)));
    assert!(matches!(prompter.prompt_int("x"), Err(Error::EndOfInput)));
    assert!(matches!(prompter.prompt_double("x"), Err(Error::EndOfInput)));
    assert!(matches!(prompter.prompt_int_in_range("x", 1, 2), Err(Error::EndOfInput)));
    assert!(matches!(prompter.prompt_double_in_range("x", 1.0, 2.0), Err(Error::EndOfInput)));
    assert!(matches!(prompter.agree("x"), Err(Error::EndOfInput)));
}

#[test]
fn test_runner_with_attempt_limit() {
    let config = PromptConfig::new().with_max_attempts(Some(2));
    let channel = ScriptedChannel::with_responses(["maybe", "later", "yes"]);
    let mut runner = Runner::new(channel, config);

    let command = Commands::Agree { question: "Proceed? ".to_string() };
    assert!(matches!(runner.run(&command), Err(Error::AttemptsExhausted { attempts: 2 })));
    assert_eq!(runner.run(&command).unwrap(), Answer::Bool(true));
    assert_eq!(runner.into_channel().diagnostics().len(), 2);
}
