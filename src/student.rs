use std::{thread, time::Duration};

use rand::Rng;

use crate::dining::DiningHall;

// 学生 1 人分。共有状態は持たず、すべて DiningHall 側にある
pub struct Student {
    id: usize,
    iterations: usize,
}

impl Student {
    pub fn new(id: usize, iterations: usize) -> Self {
        Student { id, iterations }
    }

    // 配膳 -> 着席 -> 食事 -> 退席、を iterations 回繰り返す
    // ロックを持ったまま配膳や食事をしないこと
    pub fn run(&self, hall: &DiningHall) {
        for iteration in 1..=self.iterations {
            get_food(self.id, iteration);
            hall.start_eating(self.id, iteration);
            dine(self.id, iteration);
            hall.finish_and_leave(self.id, iteration);
            leave(self.id, iteration);
        }
    }
}

// 1〜3ms のランダムな待ちで作業時間を模倣する
fn random_delay() {
    let ms = rand::thread_rng().gen_range(1..=3);
    thread::sleep(Duration::from_millis(ms));
}

fn get_food(id: usize, iteration: usize) {
    println!("iteration {iteration}: student {id} got food");
    random_delay();
}

fn dine(id: usize, iteration: usize) {
    println!("iteration {iteration}: student {id} is eating");
    random_delay();
}

fn leave(id: usize, iteration: usize) {
    println!("iteration {iteration}: student {id} left");
}
