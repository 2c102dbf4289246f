// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase angle firing control for a triac.
//!
//! The controller synchronizes to the mains zero crossings,
//! accumulates the phase angle on every time base tick and fires
//! one gate pulse per half-wave as soon as the phase angle reaches
//! the delay angle that is set with a potentiometer.
//!
//! All hardware access goes through the traits in [hal].
//! The firmware implements them with the MCU registers.

#![no_std]

pub mod analog;
pub mod debug;
pub mod fixpt;
pub mod hal;
pub mod mon;
pub mod params;
pub mod system;
pub mod timebase;
pub mod triac;

#[cfg(test)]
mod sim;

pub use crate::{
    fixpt::Deg,
    hal::{AdcPeriph, Board, DebugOut, Gate, GateOutputs, TimebaseAccess},
    params::{DEFAULT_PARAMS, Params},
    system::{GateState, System},
    timebase::{Edge, Events, Timebase},
};

// vim: ts=4 sw=4 expandtab
