use super::grid::Velocity;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn velocity(self, unit: i32) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0, -unit),
            Direction::Down => Velocity::new(0, unit),
            Direction::Left => Velocity::new(-unit, 0),
            Direction::Right => Velocity::new(unit, 0),
        }
    }
}

/// Arbitrate a directional input against the current heading.  An input whose
/// vector is the exact opposite of `current` is rejected (no instant 180°
/// reversal); everything else, including same-direction repeats, is accepted
/// and takes effect at the next tick's read of the velocity.
pub(crate) fn steer(current: Velocity, input: Direction, unit: i32) -> Velocity {
    let wanted = input.velocity(unit);
    if wanted == current.reversed() {
        current
    } else {
        wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Velocity::new(0, -25))]
    #[case(Direction::Down, Velocity::new(0, 25))]
    #[case(Direction::Left, Velocity::new(-25, 0))]
    #[case(Direction::Right, Velocity::new(25, 0))]
    fn test_velocity(#[case] d: Direction, #[case] v: Velocity) {
        assert_eq!(d.velocity(25), v);
    }

    #[rstest]
    // Reversals leave the heading unchanged:
    #[case(Velocity::new(25, 0), Direction::Left, Velocity::new(25, 0))]
    #[case(Velocity::new(-25, 0), Direction::Right, Velocity::new(-25, 0))]
    #[case(Velocity::new(0, 25), Direction::Up, Velocity::new(0, 25))]
    #[case(Velocity::new(0, -25), Direction::Down, Velocity::new(0, -25))]
    // Turns and repeats are accepted:
    #[case(Velocity::new(25, 0), Direction::Up, Velocity::new(0, -25))]
    #[case(Velocity::new(25, 0), Direction::Down, Velocity::new(0, 25))]
    #[case(Velocity::new(25, 0), Direction::Right, Velocity::new(25, 0))]
    #[case(Velocity::new(0, -25), Direction::Left, Velocity::new(-25, 0))]
    fn test_steer(#[case] current: Velocity, #[case] input: Direction, #[case] after: Velocity) {
        assert_eq!(steer(current, input, 25), after);
    }
}
