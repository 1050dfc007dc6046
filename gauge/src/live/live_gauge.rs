// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The live gauge task: subscribes to a stream of [`PointSample`]s and re-renders on
//! every change.
//!
//! Render scheduling is conflated: one render happens at a time, and samples that
//! arrive while a render is in flight collapse so only the latest is rendered next.
//! This falls out of [`tokio::sync::watch`] semantics - `changed()` is level
//! triggered and `borrow_and_update()` always yields the newest sample, so a burst
//! of updates produces at most one render per update actually observed, never a
//! queue of stale frames.

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use crate::{render_gauge, resolve_data, AutoRange, GaugeProps, GaugeSurface, PointSample};

/// Handle to a running live gauge task.
///
/// Dropping the handle does not stop the task; use [`Self::request_shutdown`]
/// followed by [`Self::await_shutdown`] for a clean stop:
///
/// ```
/// # use r3bl_gauge::{GaugeProps, LiveGauge, PointSample};
/// # use tokio::sync::watch;
/// # async fn example() -> miette::Result<()> {
/// let (sample_tx, sample_rx) = watch::channel(PointSample::default());
/// let (mut live_gauge, mut frame_rx) =
///     LiveGauge::try_start(GaugeProps::default(), 40, sample_rx)?;
///
/// sample_tx.send(PointSample::numeric(65.0)).ok();
/// let frame = frame_rx.recv().await; // One GaugeSurface per observed change.
///
/// live_gauge.request_shutdown();
/// live_gauge.await_shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LiveGauge {
    pub props: GaugeProps,
    shutdown_sender: broadcast::Sender<()>,
    reset_range_sender: mpsc::UnboundedSender<()>,
    /// This is used to signal when the task has completely shutdown. Use
    /// [`Self::await_shutdown`].
    maybe_shutdown_complete_rx: Option<oneshot::Receiver<()>>,
}

impl LiveGauge {
    /// Spawn the render task. Returns the handle and the frame stream; one rendered
    /// [`GaugeSurface`] is emitted for the initial sample and then for every
    /// observed change.
    ///
    /// # Errors
    ///
    /// Returns an error if `arg_display_width` is zero.
    pub fn try_start(
        arg_props: GaugeProps,
        arg_display_width: usize,
        arg_sample_rx: watch::Receiver<PointSample>,
    ) -> miette::Result<(LiveGauge, mpsc::UnboundedReceiver<GaugeSurface>)> {
        if arg_display_width == 0 {
            miette::bail!("live gauge display width must be greater than zero");
        }

        let (frame_sender, frame_receiver) = mpsc::unbounded_channel::<GaugeSurface>();
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let (reset_range_sender, reset_range_receiver) = mpsc::unbounded_channel::<()>();
        let (shutdown_complete_tx, shutdown_complete_rx) = oneshot::channel::<()>();

        tokio::spawn(run_render_loop(RenderLoopArgs {
            props: arg_props.clone(),
            display_width: arg_display_width,
            sample_rx: arg_sample_rx,
            frame_sender,
            shutdown_rx: shutdown_sender.subscribe(),
            reset_range_rx: reset_range_receiver,
            shutdown_complete_tx,
        }));

        tracing::info!(
            shape = %arg_props.shape,
            display_width = arg_display_width,
            "live gauge started"
        );

        Ok((
            LiveGauge {
                props: arg_props,
                shutdown_sender,
                reset_range_sender,
                maybe_shutdown_complete_rx: Some(shutdown_complete_rx),
            },
            frame_receiver,
        ))
    }

    /// Forget the remembered auto-range bounds. Call this when the subscription
    /// source behind the sample stream is replaced, so the next sample re-derives
    /// the range from scratch.
    pub fn reset_auto_range(&self) {
        // We don't care about the result of this operation (task may have stopped).
        self.reset_range_sender.send(()).ok();
    }

    /// Ask the task to stop. Returns immediately; pair with
    /// [`Self::await_shutdown`].
    pub fn request_shutdown(&self) {
        // We don't care about the result of this operation (task may have stopped).
        self.shutdown_sender.send(()).ok();
    }

    /// Wait for the task to completely shutdown. Subsequent calls return
    /// immediately.
    pub async fn await_shutdown(&mut self) {
        if let Some(receiver) = self.maybe_shutdown_complete_rx.take() {
            // We don't care about the result of this operation.
            receiver.await.ok();
        }
    }
}

struct RenderLoopArgs {
    props: GaugeProps,
    display_width: usize,
    sample_rx: watch::Receiver<PointSample>,
    frame_sender: mpsc::UnboundedSender<GaugeSurface>,
    shutdown_rx: broadcast::Receiver<()>,
    reset_range_rx: mpsc::UnboundedReceiver<()>,
    shutdown_complete_tx: oneshot::Sender<()>,
}

async fn run_render_loop(args: RenderLoopArgs) {
    let RenderLoopArgs {
        props,
        display_width,
        mut sample_rx,
        frame_sender,
        mut shutdown_rx,
        mut reset_range_rx,
        shutdown_complete_tx,
    } = args;

    let mut auto_range = AutoRange::default();

    // Initial render from the current sample.
    render_one(
        &props,
        display_width,
        &mut sample_rx,
        &mut auto_range,
        &frame_sender,
    );

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                tracing::info!("live gauge shutdown requested");
                break;
            }

            maybe_reset = reset_range_rx.recv() => {
                if maybe_reset.is_none() {
                    break;
                }
                auto_range.reset();
                tracing::debug!("live gauge auto-range reset");
                render_one(
                    &props,
                    display_width,
                    &mut sample_rx,
                    &mut auto_range,
                    &frame_sender,
                );
            }

            changed = sample_rx.changed() => {
                if changed.is_err() {
                    // Sample source dropped; nothing further to render.
                    break;
                }
                render_one(
                    &props,
                    display_width,
                    &mut sample_rx,
                    &mut auto_range,
                    &frame_sender,
                );
            }
        }
    }

    tracing::info!("live gauge stopped");
    // We don't care about the result of this operation.
    shutdown_complete_tx.send(()).ok();
}

fn render_one(
    props: &GaugeProps,
    display_width: usize,
    sample_rx: &mut watch::Receiver<PointSample>,
    auto_range: &mut AutoRange,
    frame_sender: &mpsc::UnboundedSender<GaugeSurface>,
) {
    // borrow_and_update marks the newest sample as seen, which is what conflates a
    // burst of updates into a single render.
    let sample = sample_rx.borrow_and_update().clone();
    let data = resolve_data(props, &sample, auto_range);
    let surface = render_gauge(props, &data, display_width);
    // We don't care about the result of this operation (receiver may be gone).
    frame_sender.send(surface).ok();
}
