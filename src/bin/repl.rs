use dice_notation::Roll;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.trim().is_empty() {
            match dice_notation::parse(&line) {
                Ok(rolls) => {
                    let mut rng = rand::thread_rng();
                    for roll in &rolls {
                        println!("{}: {}", roll, roll.eval(&mut rng));
                    }
                }
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
