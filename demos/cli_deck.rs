//! Terminal deck tracker example.
//!
//! Run with `RUST_LOG=debug` to trace every state transition.

use std::io::{self, Write};

use deckview::{CardId, DeckRender, DeckView, TileStyle, Tone, ViewOptions};

fn main() {
    env_logger::init();

    let view = match DeckView::standard(ViewOptions::default().with_strict_ids(true)) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("Cannot load the card catalog: {err}");
            std::process::exit(1);
        }
    };

    println!("Deck tracker (type 'q' to quit)");
    println!("Enter a card number to mark it used, 'h' to hide used cards, 'r' to reset.");

    loop {
        print_deck(&view.render());
        println!(
            "{} used, {} hidden",
            view.clicked_cards().len(),
            view.catalog.len() - view.visible_count()
        );

        let input = prompt_line("> ");
        let command: Vec<&str> = input.split_whitespace().collect();

        match command.as_slice() {
            [] => {}
            ["q" | "quit"] => break,
            ["h" | "hide"] => view.hide_used_cards(),
            ["r" | "reset"] => view.reset_game(),
            [id] | ["t" | "toggle", id] => match id.parse::<u32>() {
                Ok(id) => {
                    if let Err(err) = view.toggle_card(CardId(id)) {
                        println!("Toggle error: {err}");
                    }
                }
                Err(_) => println!("Unknown command."),
            },
            _ => println!("Unknown command."),
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_deck(render: &DeckRender) {
    println!();
    for section in &render.sections {
        let heading = format!("{} {}", section.heading.symbol, section.heading.title);
        println!("{}", paint(&heading, section.heading.tone));

        let tiles: Vec<String> = section
            .tiles
            .iter()
            .map(|tile| {
                let face = format!("{:>2}{}", tile.rank, tile.symbol);
                let face = match tile.style {
                    TileStyle::Normal => format!(" {face} "),
                    TileStyle::Clicked => format!("({face})"),
                };
                format!("{}{:>3}", paint(&face, tile.tone), tile.id.0)
            })
            .collect();

        if tiles.is_empty() {
            println!("  (all hidden)");
        } else {
            println!("  {}", tiles.join("  "));
        }
    }
    println!("[Hide Cards] [Reset Game]");
}

fn paint(text: &str, tone: Tone) -> String {
    let code = match tone {
        Tone::Red => "31",
        Tone::Neutral => "0",
        Tone::Muted => "2",
    };
    colorize(text, code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
