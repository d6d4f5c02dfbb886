use crate::error::{IsingError, Result};
use crate::lattice::Lattice;
use crate::metropolis::sweep;
use crate::params::{validate_temperatures, IsingParams};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Frame-indexed temperature schedule for the animation driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureSchedule {
    /// Same temperature for every frame
    Constant(f64),
    /// k temperatures over k equal, contiguous runs of frames
    Segments(Vec<f64>),
    /// Three runs over thirds of the frames; a missing second or third
    /// temperature falls back to the first one
    LegacyThirds(Vec<f64>),
}

impl TemperatureSchedule {
    pub fn validate(&self) -> Result<()> {
        match self {
            TemperatureSchedule::Constant(t) => validate_temperatures(std::slice::from_ref(t)),
            TemperatureSchedule::Segments(temps) | TemperatureSchedule::LegacyThirds(temps) => {
                validate_temperatures(temps)
            }
        }
    }

    /// Temperature used for `frame` out of `frames`
    ///
    /// Assumes a validated, non-empty schedule.
    pub fn temperature_at(&self, frame: usize, frames: usize) -> f64 {
        match self {
            TemperatureSchedule::Constant(t) => *t,
            TemperatureSchedule::Segments(temps) => {
                let k = temps.len();
                let segment = if frames == 0 { 0 } else { frame * k / frames };
                temps[segment.min(k - 1)]
            }
            TemperatureSchedule::LegacyThirds(temps) => {
                let (frame, frames) = (frame as f64, frames as f64);
                let index = if frame < frames / 3.0 {
                    0
                } else if frame < 2.0 * frames / 3.0 {
                    1
                } else {
                    2
                };
                temps.get(index).copied().unwrap_or(temps[0])
            }
        }
    }
}

/// One rendered step of the animation
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub temperature: f64,
    pub spins: Vec<Vec<i8>>,
}

/// Pull-based source of lattice snapshots
///
/// Each call to `next` runs one Metropolis sweep at the scheduled
/// temperature and yields a copy of the lattice. The lattice carries over
/// between frames; iteration stops after `frames` items until
/// `reinitialize` draws a fresh lattice and rewinds the frame counter.
#[derive(Debug)]
pub struct Animation<R: Rng> {
    params: IsingParams,
    schedule: TemperatureSchedule,
    frames: usize,
    lattice: Lattice,
    rng: R,
    frame: usize,
}

impl<R: Rng> Animation<R> {
    pub fn new(
        params: IsingParams,
        schedule: TemperatureSchedule,
        frames: usize,
        mut rng: R,
    ) -> Result<Self> {
        params.validate()?;
        schedule.validate()?;
        if frames == 0 {
            return Err(IsingError::ZeroFrames);
        }

        let lattice = Lattice::random(params.size, &mut rng)?;
        Ok(Self {
            params,
            schedule,
            frames,
            lattice,
            rng,
            frame: 0,
        })
    }

    /// Draw a fresh random lattice and restart from frame 0
    pub fn reinitialize(&mut self) -> Result<()> {
        self.lattice = Lattice::random(self.params.size, &mut self.rng)?;
        self.frame = 0;
        Ok(())
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }
}

impl<R: Rng> Iterator for Animation<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= self.frames {
            return None;
        }

        let temperature = self.schedule.temperature_at(self.frame, self.frames);
        sweep(&mut self.lattice, &self.params, temperature, &mut self.rng);

        let frame = Frame {
            index: self.frame,
            temperature,
            spins: self.lattice.snapshot(),
        };
        self.frame += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames - self.frame;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Animation<R> {}
