use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Compares Prim's and Kruskal's MST algorithms over a batch of graphs")]
pub struct ProgramArguments {
    #[arg(short, long, help = "input graphs file path (JSON)")]
    pub input: String,

    #[arg(short, long, help = "results file path (JSON)")]
    pub output: Option<String>,

    #[arg(long, help = "detailed per-algorithm results file path (CSV)")]
    pub csv: Option<String>,

    #[arg(
        long,
        help = "number of leading graphs to log in full at debug level",
        default_value = "5"
    )]
    pub preview: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = ProgramArguments::parse_from(["mst-compare", "--input", "data/input.json"]);
        assert_eq!(args.input, "data/input.json");
        assert!(args.output.is_none());
        assert!(args.csv.is_none());
        assert_eq!(args.preview, 5);
    }

    #[test]
    fn parses_output_paths() {
        let args = ProgramArguments::parse_from([
            "mst-compare",
            "-i",
            "in.json",
            "-o",
            "out.json",
            "--csv",
            "out.csv",
            "--preview",
            "0",
        ]);
        assert_eq!(args.output.as_deref(), Some("out.json"));
        assert_eq!(args.csv.as_deref(), Some("out.csv"));
        assert_eq!(args.preview, 0);
    }
}
