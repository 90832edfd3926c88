use std::{cell::RefCell, collections::HashMap};

use colored::Colorize;

pub mod config;
pub mod member;
pub mod normalize;
pub mod projects;
pub mod report;
pub mod svglogo;

/// Capability to perform a cached GET returning parsed JSON.
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> Result<serde_json::Value, String>;
}

/// Sink for the loader's progress and anomaly messages.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Narrates to the console like the rest of the tooling.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn warn(&self, message: &str) {
        println!("{}", message.red());
    }
}

/// Blocking HTTP client with a per-instance response cache. Repeat GETs for
/// the same URL are answered from memory, which keeps the parent-project
/// lookups from hammering the directory.
pub struct CachedClient {
    retries: u8,
    cache: RefCell<HashMap<String, serde_json::Value>>,
}

impl CachedClient {
    pub fn new(retries: u8) -> Self {
        Self {
            retries,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for CachedClient {
    fn default() -> Self {
        Self::new(3)
    }
}

impl JsonFetcher for CachedClient {
    fn get_json(&self, url: &str) -> Result<serde_json::Value, String> {
        if let Some(value) = self.cache.borrow().get(url) {
            return Ok(value.clone());
        }

        let mut tries = 0;
        loop {
            tries += 1;
            let response = reqwest::blocking::Client::new()
                .get(url)
                .header("User-Agent", "LFX Catalog")
                .header("Accept", "application/json")
                .send()
                .map(|response| response.text());

            // Handle communication issues with the directory
            let content = match response {
                Ok(Ok(content)) => content,
                Ok(Err(e)) => {
                    if tries >= self.retries {
                        println!("{}", "Retries exhausted".red());
                        return Err(e.to_string());
                    }

                    println!(
                        "{}: {}",
                        "Going to retry because couldn't read response from the project directory:"
                            .yellow(),
                        e.to_string().red()
                    );

                    continue;
                }
                Err(e) => {
                    if tries >= self.retries {
                        println!("{}", "Retries exhausted".red());
                        return Err(e.to_string());
                    }

                    println!(
                        "{}: {}",
                        "Going to retry because couldn't make request to the project directory:"
                            .yellow(),
                        e.to_string().red()
                    );

                    continue;
                }
            };

            let value = serde_json::from_str::<serde_json::Value>(&content).map_err(|e| {
                format!("Could not deserialize the project directory's response. Error: {e}")
            })?;

            self.cache
                .borrow_mut()
                .insert(url.to_string(), value.clone());

            return Ok(value);
        }
    }
}
