use crate::prelude::*;

/// Snapshot every input device into this frame's [`InputSample`]
pub fn sample_input(input: Res<InputState>, mut sample: ResMut<InputSample>) {
    *sample = input.sample();
}

/// Forward the sample's exit flag to the engine
pub fn request_exit(sample: Res<InputSample>, mut exit: ResMut<ExitRequested>) {
    if sample.exit && !exit.0 {
        log::info!("Exit requested by input");
        exit.0 = true;
    }
}
