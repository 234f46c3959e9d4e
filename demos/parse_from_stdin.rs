use refuri::Uri;
use std::io;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        let uri = Uri::parse_with_password(&line);
        println!("{uri:#?}");
        if let Err(e) = uri.validate() {
            println!("Invalid: {e}");
        }
    }
}
