pub mod data;
pub mod progress;

pub use data::*;
pub use progress::*;

impl TestCase {
    pub fn print_request_info(&self, url: &str) {
        println!("Request Info: ");
        println!("\tMethod: {}", self.method);
        println!("\tURL: {}", url);
        println!("\tHeaders: ");
        for (key, value) in self.effective_headers() {
            println!("\t\t{}: {}", key, value);
        }
        if let Some(payload) = &self.payload {
            match serde_json::to_string_pretty(payload) {
                Ok(pretty_json) => {
                    let indented_json = pretty_json.replace('\n', "\n\t\t");
                    println!("\tPayload: {}", indented_json);
                }
                Err(e) => eprintln!("Error rendering payload: {}", e),
            }
        }
    }
}
