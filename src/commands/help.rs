pub fn execute() -> String {
    [
        "📖 money-graph",
        "Viewer for a money-graph finance backend.",
        "",
        "Usage: money-graph <command> [args]",
        "",
        "  info                 Show database name and group count",
        "  groups | ls          List all groups",
        "  entries | e <ID>     List the entries of one group",
        "  overview | ov        Totals per group",
        "  help                 Show this help message",
        "",
        "Environment:",
        "  MONEY_GRAPH_URL            Backend address (default http://localhost:8080)",
        "  MONEY_GRAPH_TIMEOUT_SECS   Request timeout in seconds",
        "  RUST_LOG                   Log filter, e.g. money_graph_client=debug",
    ]
    .join("\n")
}
