/// Position, velocity and acceleration of one axis at an instant.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub pos: f64,
    pub vel: f64,
    pub acc: f64,
}

impl MotionState {
    /// At rest at the local origin.
    pub const REST: MotionState = MotionState {
        pos: 0.0,
        vel: 0.0,
        acc: 0.0,
    };

    pub fn new(pos: f64, vel: f64, acc: f64) -> Self {
        Self { pos, vel, acc }
    }

    /// State after applying constant jerk `jrk` for `ts` seconds.
    ///
    /// acc(t) = a0 + j·t
    /// vel(t) = v0 + a0·t + j·t²/2
    /// pos(t) = p0 + v0·t + a0·t²/2 + j·t³/6
    pub fn advance(&self, jrk: f64, ts: f64) -> Self {
        let ts2 = ts * ts;
        Self {
            acc: jrk * ts + self.acc,
            vel: jrk * ts2 / 2.0 + self.acc * ts + self.vel,
            pos: jrk * ts2 * ts / 6.0 + self.acc * ts2 / 2.0 + self.vel * ts + self.pos,
        }
    }

    /// State after holding velocity for `ts` seconds. Acceleration is
    /// carried through unchanged and does not feed into position.
    pub fn cruise(&self, ts: f64) -> Self {
        Self {
            acc: self.acc,
            vel: self.vel,
            pos: self.vel * ts + self.pos,
        }
    }

    /// Same state shifted by a position offset.
    pub fn offset(&self, pos: f64) -> Self {
        Self {
            pos: self.pos + pos,
            ..*self
        }
    }
}
