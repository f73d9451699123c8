//! Progressive formatting demo.
//!
//! Feeds digits one keystroke at a time into each mask dialect and prints
//! the display string and caret after every step.
//!
//! Run with: cargo run --example progressive

use spark_mask::{MaskKind, MaskedField};

fn demo(label: &str, kind: MaskKind, digits: &str) {
    println!("{label} ({digits})");
    let mut field = MaskedField::new(kind);
    for d in digits.chars() {
        let result = field.insert(&d.to_string());
        println!("  + {d} → {:<16} caret {}", result.formatted, result.caret);
    }
    println!();
}

fn main() {
    demo("CPF", MaskKind::Cpf, "12345678901");
    demo("Phone", MaskKind::Phone, "11987654321");
    demo("CEP", MaskKind::Cep, "12345678");
    demo("Birthdate", MaskKind::BirthDate, "01012000");
    demo("Currency", MaskKind::Currency, "123456");

    // Backspace walks digits back out, skipping literals.
    let mut field = MaskedField::new(MaskKind::Cpf);
    field.on_edit("12345678901", 11);
    println!("CPF backspace from {}", field.formatted());
    while !field.formatted().is_empty() {
        let result = field.backspace();
        println!("  ⌫ → {:<16} caret {}", result.formatted, result.caret);
    }
}
