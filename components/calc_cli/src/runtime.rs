//! Runtime orchestration for expression evaluation
//!
//! The Runtime struct coordinates all components:
//! - Lexer and Parser for the front end
//! - Transformer for lowering to postfix
//! - Vm for evaluation

use interpreter::Vm;
use parser::{tokenize, transform, Grammar, Parser, Program, Token};
use postfix_system::PostfixChunk;
use serde::Serialize;
use serde_json::json;

use crate::error::CliResult;

/// Every intermediate product of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Token stream
    pub tokens: Vec<Token>,
    /// Parsed program
    pub ast: Program,
    /// Lowered instructions
    pub postfix: PostfixChunk,
    /// Values left on the stack
    pub values: Vec<f64>,
}

/// Main runtime that runs expressions through the whole pipeline
#[derive(Debug)]
pub struct Runtime {
    /// Operator semantics for the parser
    grammar: Grammar,
    /// Whether to print tokens before parsing
    print_tokens: bool,
    /// Whether to print the AST before lowering
    print_ast: bool,
    /// Whether to print postfix before evaluation
    print_postfix: bool,
    /// Whether dumps and results are rendered as JSON
    json: bool,
    /// Persistent VM instance
    vm: Vm,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Example
    /// ```
    /// use calc_cli::Runtime;
    /// use parser::Grammar;
    ///
    /// let runtime = Runtime::new(Grammar::Precedence);
    /// ```
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            print_tokens: false,
            print_ast: false,
            print_postfix: false,
            json: false,
            vm: Vm::new(),
        }
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Enable postfix printing
    pub fn with_print_postfix(mut self, enabled: bool) -> Self {
        self.print_postfix = enabled;
        self
    }

    /// Render dumps and results as JSON
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Execute an expression file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or evaluation fails
    ///
    /// # Example
    /// ```no_run
    /// use calc_cli::Runtime;
    /// use parser::Grammar;
    ///
    /// let mut runtime = Runtime::new(Grammar::Precedence);
    /// let values = runtime.execute_file("sums.calc").unwrap();
    /// ```
    pub fn execute_file(&mut self, path: &str) -> CliResult<Vec<f64>> {
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Execute source text, printing any enabled dumps to stdout
    ///
    /// Returns one value per top-level expression. Each dump is printed as
    /// soon as its stage finishes, so stages that ran before a failure are
    /// still shown.
    ///
    /// # Example
    /// ```
    /// use calc_cli::Runtime;
    /// use parser::Grammar;
    ///
    /// let mut runtime = Runtime::new(Grammar::Precedence);
    /// assert_eq!(runtime.execute_string("2 * (3 + 4)").unwrap(), vec![14.0]);
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<Vec<f64>> {
        let trace = self.run_with_dumps(source, &mut |dump| println!("{}", dump))?;
        Ok(trace.values)
    }

    /// Run every stage and keep each intermediate product
    pub fn trace(&mut self, source: &str) -> CliResult<Trace> {
        self.run_with_dumps(source, &mut |_| {})
    }

    /// Run every stage, handing each enabled dump to `emit` once its stage
    /// has produced it
    ///
    /// # Example
    /// ```
    /// use calc_cli::Runtime;
    /// use parser::Grammar;
    ///
    /// let mut runtime = Runtime::new(Grammar::Precedence).with_print_tokens(true);
    /// let mut dumps = Vec::new();
    /// assert!(runtime.run_with_dumps("1 +", &mut |d| dumps.push(d)).is_err());
    /// assert_eq!(dumps, vec!["Tokens: [Number(1), Operator(+)]"]);
    /// ```
    pub fn run_with_dumps(
        &mut self,
        source: &str,
        emit: &mut dyn FnMut(String),
    ) -> CliResult<Trace> {
        let tokens = tokenize(source);
        if let Some(dump) = self.tokens_dump(&tokens)? {
            emit(dump);
        }

        let ast = Parser::new(tokens.clone())
            .with_source(source)
            .with_grammar(self.grammar)
            .parse()?;
        if let Some(dump) = self.ast_dump(&ast)? {
            emit(dump);
        }

        let postfix = transform(&ast);
        if let Some(dump) = self.postfix_dump(&postfix)? {
            emit(dump);
        }

        let values = self.vm.run(&postfix)?;

        Ok(Trace {
            tokens,
            ast,
            postfix,
            values,
        })
    }

    /// Render the enabled stage dumps for a trace, one entry per stage
    pub fn dumps(&self, trace: &Trace) -> CliResult<Vec<String>> {
        let out = [
            self.tokens_dump(&trace.tokens)?,
            self.ast_dump(&trace.ast)?,
            self.postfix_dump(&trace.postfix)?,
        ];
        Ok(out.into_iter().flatten().collect())
    }

    fn tokens_dump(&self, tokens: &[Token]) -> CliResult<Option<String>> {
        if !self.print_tokens {
            return Ok(None);
        }
        Ok(Some(if self.json {
            serde_json::to_string(&json!({ "tokens": tokens }))?
        } else {
            format!("Tokens: {}", format_tokens(tokens))
        }))
    }

    fn ast_dump(&self, ast: &Program) -> CliResult<Option<String>> {
        if !self.print_ast {
            return Ok(None);
        }
        Ok(Some(if self.json {
            serde_json::to_string(&json!({ "ast": ast }))?
        } else {
            format!("AST: {}", ast)
        }))
    }

    fn postfix_dump(&self, postfix: &PostfixChunk) -> CliResult<Option<String>> {
        if !self.print_postfix {
            return Ok(None);
        }
        Ok(Some(if self.json {
            serde_json::to_string(&json!({ "postfix": postfix }))?
        } else {
            format!("Postfix: {}", postfix)
        }))
    }

    /// Render evaluation results, one line per value or a JSON array
    pub fn format_results(&self, values: &[f64]) -> CliResult<String> {
        if self.json {
            let rendered: Vec<String> = values.iter().map(|v| format_value(*v)).collect();
            return Ok(serde_json::to_string(&json!({ "values": rendered }))?);
        }
        Ok(values
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    /// The grammar in use
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Switch grammar for subsequent evaluations
    pub fn set_grammar(&mut self, grammar: Grammar) {
        self.grammar = grammar;
    }

    /// Check if token printing is enabled
    pub fn is_print_tokens_enabled(&self) -> bool {
        self.print_tokens
    }

    /// Check if AST printing is enabled
    pub fn is_print_ast_enabled(&self) -> bool {
        self.print_ast
    }

    /// Check if postfix printing is enabled
    pub fn is_print_postfix_enabled(&self) -> bool {
        self.print_postfix
    }

    /// Check if JSON output is enabled
    pub fn is_json_enabled(&self) -> bool {
        self.json
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Grammar::default())
    }
}

/// Format a number for display
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

fn format_tokens(tokens: &[Token]) -> String {
    let items: Vec<String> = tokens
        .iter()
        .map(|t| format!("{:?}({})", t.kind, t.text))
        .collect();
    format!("[{}]", items.join(", "))
}
