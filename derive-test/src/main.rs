use argschema::{ArgumentParser, Schema};

const SCHEMA: &str = r#"
{
    "options": [
        { "name": "-c", "alias": "--command", "description": "Command of", "requires_value": true },
        { "name": "-d", "description": "Not wait" },
        { "name": "-p", "alias": "--path", "description": "Path of", "requires_value": true },
        { "name": "-trace", "description": "Trace request" }
    ]
}"#;

fn main() {
    let schema: Schema = match serde_json::from_str(SCHEMA) {
        Ok(schema) => schema,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    let parser = match ArgumentParser::new(schema) {
        Ok(parser) => parser,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    match parser.process_arguments(std::env::args()) {
        Ok(options) if !options.is_empty() => {
            println!("Command line options: ");
            let mut options: Vec<_> = options.into_iter().collect();
            options.sort();
            for (name, value) in options {
                println!("{} {}", name, value);
            }
        }
        Ok(_) => {}
        Err(e) => println!("{}", e),
    }
}
