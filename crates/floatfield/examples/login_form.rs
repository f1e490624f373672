//! A headless login form with email and password fields.
//!
//! Replays a short scripted session against two fields and prints what a
//! renderer would draw each step.
//!
//! Run with `RUST_LOG=floatfield=debug cargo run --example login_form`.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;
use std::time::{Duration, Instant};

use floatfield::prelude::*;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

/// Controller shared by both fields.
#[derive(Default)]
struct LoginController {
    log: RefCell<Vec<String>>,
}

impl FieldDelegate for LoginController {
    fn did_begin_editing(&self, field: &FloatingLabelField) {
        self.log
            .borrow_mut()
            .push(format!("began editing {:?}", field.placeholder()));
    }

    fn did_end_editing(&self, field: &FloatingLabelField) {
        self.log.borrow_mut().push(format!(
            "finished editing {:?} with {} graphemes",
            field.placeholder(),
            field.input().text_length()
        ));
    }

    fn should_change_characters(
        &self,
        _field: &FloatingLabelField,
        _range: Range<usize>,
        replacement: &str,
    ) -> bool {
        !replacement.contains(char::is_whitespace)
    }
}

fn settle(field: &mut FloatingLabelField, mut now: Instant) -> Instant {
    while field.tick(now) {
        now += FRAME;
    }
    now
}

fn describe(field: &FloatingLabelField) {
    let label = field.label();
    println!(
        "  [{}] text={:?} label={:?} at {:?} size={} error={:?}",
        field.placeholder(),
        field.input().display_text(),
        field.label_position(),
        label.visual_frame(),
        label.font_size(),
        field.error_message(),
    );
}

fn type_text(field: &mut FloatingLabelField, text: &str) {
    for ch in text.chars() {
        let at = field.input().text_length();
        field.handle_event(FieldEvent::ReplaceCharacters {
            range: at..at,
            replacement: ch.to_string(),
        });
    }
}

fn main() -> floatfield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("floatfield=info")),
        )
        .init();

    let controller = Rc::new(LoginController::default());

    let mut email = FloatingLabelField::new(LayoutConfig::default())?;
    email.set_placeholder("Email*");
    email.set_after_color(Color::GRAY);
    email.configure(
        KeyboardType::Email,
        ContentHint::Email,
        Some(DelegateRef::new(&controller)),
    );

    let mut password = FloatingLabelField::new(LayoutConfig::default())?;
    password.set_placeholder("Password*");
    password.set_secure_input(true);
    password.configure(
        KeyboardType::Default,
        ContentHint::Password,
        Some(DelegateRef::new(&controller)),
    );

    let mut now = Instant::now();

    println!("initial:");
    describe(&email);
    describe(&password);

    email.handle_event(FieldEvent::FocusIn);
    now = settle(&mut email, now);
    type_text(&mut email, "ada at example");
    println!("after typing into email:");
    describe(&email);

    if !email.text().contains('@') {
        email.show_error_message("Please enter a valid email");
    }
    email.handle_event(FieldEvent::ReturnPressed);

    password.handle_event(FieldEvent::FocusIn);
    now = settle(&mut password, now);
    type_text(&mut password, "hunter2");
    password.handle_event(FieldEvent::VisibilityToggleTapped);
    println!("password revealed:");
    describe(&password);

    password.handle_event(FieldEvent::VisibilityToggleTapped);
    password.handle_event(FieldEvent::FocusOut);
    settle(&mut password, now);

    println!("final:");
    describe(&email);
    describe(&password);

    for line in controller.log.borrow().iter() {
        println!("delegate: {line}");
    }

    Ok(())
}
