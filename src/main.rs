use std::{env, fs::read_to_string, io::Read, process::exit, time::Instant};

use lexan::{errors::errors::Error, lexer::lexer::analyze, lexer::tokens::Token};

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();

    let source = if args.len() > 1 {
        let path = &args[1];
        read_to_string(path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| Error::StdinRead { source })?;
        buffer
    };

    let start = Instant::now();
    let tokens = analyze(&source);
    let elapsed = start.elapsed();

    print_table(&tokens);

    println!();
    println!("{} tokens in {:?}", tokens.len(), elapsed);

    Ok(())
}

fn print_table(tokens: &[Token]) {
    println!("{:<20} {:<12} {}", "Lexeme", "Category", "Subcategory");
    println!("{:-<20} {:-<12} {:-<36}", "", "", "");

    for token in tokens {
        println!(
            "{:<20} {:<12} {}",
            token.lexeme,
            token.category.to_string(),
            token.subcategory.as_deref().unwrap_or("")
        );
    }
}
