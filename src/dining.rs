use std::sync::{Condvar, Mutex};

// 食堂のカウンタ
// 3 つとも DiningHall の Mutex 越しにしか触らない
#[derive(Debug)]
struct HallState {
    ready_to_eat: usize,   // 食べ始めるのを待っている人数
    eating: usize,         // 食事中の人数
    ready_to_leave: usize, // 退席を待っている人数
}

impl HallState {
    // 食べ始めてよいか
    // 誰も食べていないときに 1 人だけで席につくのは禁止
    // (最初は 2 人以上そろってから、誰かが食べていれば自由に合流できる)
    fn can_start_eating(&self) -> bool {
        !(self.eating == 0 && self.ready_to_eat < 2)
    }

    // 退席してよいか
    fn can_leave(&self) -> bool {
        if self.eating == 0 {
            // 誰も食べていないなら出てよい
            return true;
        }
        if self.eating >= 2 {
            // 2 人以上残るので誰もひとりにならない
            return true;
        }

        // 食事中が 1 人だけのケース
        // 退席待ちが 2 人以上いればその同伴で出てよい、というのが元の規則
        // 1 人目が実際に出た瞬間にひとりになる可能性は承知の上でこのままにしている
        if self.ready_to_leave >= 2 {
            return true;
        }

        // 食事中 1 人、退席待ち 2 人未満。出るとひとりにしてしまうので待つ
        false
    }
}

// モニタ本体
// ロックは 1 つだけで、条件変数は食べ始め用と退席用の 2 本
pub struct DiningHall {
    state: Mutex<HallState>,
    cond_eat: Condvar,
    cond_leave: Condvar,
}

impl DiningHall {
    pub fn new() -> Self {
        DiningHall {
            state: Mutex::new(HallState {
                ready_to_eat: 0,
                eating: 0,
                ready_to_leave: 0,
            }),
            cond_eat: Condvar::new(),
            cond_leave: Condvar::new(),
        }
    }

    // 食べ始めの宣言から着席まで
    // 起こされるたびに述語を見直す。notify は許可の意味ではない
    pub fn start_eating(&self, id: usize, iteration: usize) {
        let mut state = self.state.lock().unwrap();

        state.ready_to_eat += 1;
        println!(
            "iteration {}: student {} ready to eat (ready: {}, eating: {})",
            iteration, id, state.ready_to_eat, state.eating
        );

        while !state.can_start_eating() {
            println!("iteration {}: student {} waiting to eat...", iteration, id);
            state = self.cond_eat.wait(state).unwrap();
        }

        state.ready_to_eat -= 1;
        state.eating += 1;
        println!(
            "iteration {}: student {} started eating (ready: {}, eating: {})",
            iteration, id, state.ready_to_eat, state.eating
        );

        // カウンタが変わったので、まだ待っている側の述語も真になりうる
        self.cond_eat.notify_all();
    }

    // 食べ終わりの宣言から退席まで
    // 宣言 (eating -= 1, ready_to_leave += 1) には許可は要らない
    pub fn finish_and_leave(&self, id: usize, iteration: usize) {
        let mut state = self.state.lock().unwrap();

        state.eating -= 1;
        state.ready_to_leave += 1;
        println!(
            "iteration {}: student {} finished eating (leaving: {}, eating: {})",
            iteration, id, state.ready_to_leave, state.eating
        );

        while !state.can_leave() {
            println!(
                "iteration {}: student {} waiting to leave... (leaving: {}, eating: {})",
                iteration, id, state.ready_to_leave, state.eating
            );
            state = self.cond_leave.wait(state).unwrap();
        }

        state.ready_to_leave -= 1;
        println!(
            "iteration {}: student {} leaving... (leaving: {}, eating: {})",
            iteration, id, state.ready_to_leave, state.eating
        );

        // 退席待ちだけでなく、食べ始め待ちも起こしておく
        // (元の実装がそうしているのでそのまま踏襲)
        self.cond_leave.notify_all();
        self.cond_eat.notify_all();
    }
}
