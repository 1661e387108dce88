use std::{env, error::Error, sync::Arc, thread};

use dining::DiningHall;
use student::Student;

mod dining;
mod student;

fn usage(program: &str) -> Box<dyn Error> {
    format!("usage: {program} <total_students> <iterations>").into()
}

// 引数は学生数とイテレーション数の 2 つ。どちらも正の整数
fn parse_args() -> Result<(usize, usize), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        return Err(usage(&args[0]));
    }

    let total_students: usize = args[1].parse().map_err(|_| usage(&args[0]))?;
    let iterations: usize = args[2].parse().map_err(|_| usage(&args[0]))?;
    if total_students == 0 || iterations == 0 {
        return Err("total_students and iterations must be positive".into());
    }

    Ok((total_students, iterations))
}

fn main() -> Result<(), Box<dyn Error>> {
    let (total_students, iterations) = parse_args()?;

    println!("starting dinner with {total_students} students for {iterations} iterations...");

    let hall = Arc::new(DiningHall::new());
    let mut v = Vec::new();

    for id in 1..=total_students {
        let hall0 = hall.clone();
        let t = thread::spawn(move || {
            Student::new(id, iterations).run(&hall0);
        });
        v.push(t);
    }

    for t in v {
        t.join().unwrap();
    }

    println!("all {iterations} iterations completed by all {total_students} students");
    Ok(())
}
