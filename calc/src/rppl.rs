use calc_core::{parser::prelude::{parse_line, Postfix}, SessionConfig};

use crate::{cli::print_error, repl::{read_loop, PROMPT}};

pub fn start(config: SessionConfig) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	read_loop(stdin.lock(), Some(PROMPT), |_, input| {
		match parse_line(input, config.max_depth, config.max_operators) {
			Ok(tree) => {
				println!("{tree}");
				println!("postfix: {}", tree.postfix());
			},
			Err(err) => print_error(&err, "<stdin>")
		}
	})
}
