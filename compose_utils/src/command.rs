/// Quotes are not interpreted: `sh -c "echo hi"` yields four arguments.
pub fn format_command(command: Option<&str>) -> Option<Vec<String>> {
    command.map(|command| command.split_whitespace().map(String::from).collect())
}
