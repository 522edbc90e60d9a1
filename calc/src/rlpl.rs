use calc_core::lexer::prelude::Lexer;

use crate::repl::{read_loop, PROMPT};

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	read_loop(stdin.lock(), Some(PROMPT), |_, input| {
		let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

		for res in lexer {
			match res {
				Ok((start, token, end)) => {
					println!("{start}..{end}\t{token:?}");
				},
				Err(err) => {
					let (message, messages) = err.details();
					println!("[at {}] Lexical Error: {}", err.location.start, message);
					if !messages.is_empty() {
						println!("{}", messages.join("\n"));
					}
				}
			}
		}
	})
}
