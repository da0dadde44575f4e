use bumpalo::Bump;
use clap::Parser;
use miette::Result;
use minnow_core::evaluator::eval;
use minnow_core::parser;
use minnow_core::values::{Env, Environment};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, KeyCode, KeyModifiers, Reedline,
    ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

/// Minnow - a small dynamically-typed scripting language
#[derive(Parser, Debug)]
#[command(name = "minnow")]
#[command(about = "Evaluate Minnow programs", long_about = None)]
struct Args {
    /// Print the parsed program before evaluating (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Program to evaluate (if not provided, reads from stdin)
    program: Option<String>,
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create().with_edit_mode(edit_mode);
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(">>".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Run one line through the pipeline against the session environment.
///
/// Parse diagnostics print one per line, tab-indented; otherwise the
/// evaluated value's inspection string prints, runtime errors included.
fn interpret_line<'arena>(
    arena: &'arena Bump,
    env: &Env<'arena>,
    input: &str,
    debug_parse: bool,
) {
    // Copy the line into the session arena: its AST has to outlive the
    // line, since closures defined here may be called much later.
    let source = &*arena.alloc_str(input);

    let program = match parser::parse(arena, source) {
        Ok(program) => program,
        Err(diagnostics) => {
            for diagnostic in diagnostics {
                println!("\t{}", diagnostic);
            }
            return;
        }
    };

    if debug_parse {
        println!("=== Parsed program ===");
        println!("{}", program);
        println!();
    }

    println!("{}", eval(&program, env));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // One arena and one root environment for the whole session.
    let arena = Bump::new();
    let env = Environment::new();

    // Direct program argument
    if let Some(program) = args.program {
        interpret_line(&arena, &env, &program, args.debug_parse);
        return Ok(());
    }

    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("Minnow REPL - type statements to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_line(&arena, &env, buffer.as_ref(), args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };
            interpret_line(&arena, &env, &line, args.debug_parse);
        }

        Ok(())
    }
}
