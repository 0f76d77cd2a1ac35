//! Pipeline parsing.
//!
//! The grammar is deliberately small: the raw line splits on `|` into
//! stages, each stage splits on whitespace into a command name and its
//! arguments. Blank stages are discarded, so a blank or pipe-only line
//! parses to an empty pipeline and never reaches command lookup.

/// A single command invocation within a pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a raw input line into pipeline stages.
pub fn parse_pipeline(input: &str) -> Vec<ParsedCommand> {
    input
        .split('|')
        .filter_map(|stage| {
            let mut tokens = stage.split_whitespace();
            let name = tokens.next()?;
            Some(ParsedCommand {
                name: name.to_string(),
                args: tokens.map(str::to_string).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_command() {
        let pipeline = parse_pipeline("ls");
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline[0].name, "ls");
        assert!(pipeline[0].args.is_empty());
    }

    #[test]
    fn test_command_with_args() {
        let pipeline = parse_pipeline("  ls  -a   -l ");
        assert_eq!(pipeline[0].name, "ls");
        assert_eq!(pipeline[0].args, vec!["-a", "-l"]);
    }

    #[test]
    fn test_pipeline_stages() {
        let pipeline = parse_pipeline("ls | grep txt | grep re");
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[1].name, "grep");
        assert_eq!(pipeline[1].args, vec!["txt"]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_pipeline("").is_empty());
        assert!(parse_pipeline("   ").is_empty());
    }

    #[test]
    fn test_pipe_only_input_is_empty() {
        assert!(parse_pipeline("|").is_empty());
        assert!(parse_pipeline(" | | ").is_empty());
    }

    #[test]
    fn test_blank_stages_are_discarded() {
        let pipeline = parse_pipeline("ls | | grep a");
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline[0].name, "ls");
        assert_eq!(pipeline[1].name, "grep");
    }

    #[test]
    fn test_trailing_pipe_is_discarded() {
        let pipeline = parse_pipeline("ls |");
        assert_eq!(pipeline.len(), 1);
    }
}
