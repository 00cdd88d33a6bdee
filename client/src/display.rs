/// Where rendered boards and session messages go.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// Writes each message on its own line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects messages, one entry per `show` call
impl DisplaySink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
