// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document pipeline — rasterize, select, invert, stage, compose, clean up.
//
// One `run` call owns a whole conversion: every page of the input is
// rendered and staged exactly once, composition consumes the staging
// manifest in ascending page order, and the staging workspace is released
// whether the run succeeds or fails.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use image::DynamicImage;
use tempfile::TempDir;
use tracing::{debug, info, instrument, warn};

use nachtdruck_core::error::{NachtdruckError, Result};
use nachtdruck_core::{AppConfig, InversionParameters, PageSelection, RunId, RunReport};

use crate::page::PageProcessor;
use crate::pdf::writer::PdfWriter;
use crate::raster::Rasterizer;

/// Orchestrates one document conversion from input PDF to output PDF.
pub struct DocumentPipeline<R: Rasterizer> {
    rasterizer: R,
    config: AppConfig,
}

impl<R: Rasterizer> DocumentPipeline<R> {
    pub fn new(rasterizer: R, config: AppConfig) -> Self {
        Self { rasterizer, config }
    }

    /// Convert `input` into `output`, inverting the pages selected by
    /// `page_expression` (every page when absent).
    ///
    /// The staging workspace is created fresh for this run and removed
    /// exactly once before returning, on success and on every failure path.
    /// On failure nothing is left at `output`.
    #[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        page_expression: Option<&str>,
        params: InversionParameters,
    ) -> Result<RunReport> {
        let run_id = RunId::new();
        let started = Instant::now();
        info!(%run_id, "Pipeline run starting");

        let raster_pages = self.rasterizer.rasterize(input)?;
        let total_pages = raster_pages.len();

        let selection = PageSelection::parse(page_expression, total_pages)?;
        info!(total_pages, selected = selection.len(), "Selection resolved");

        let workspace = self.acquire_workspace()?;
        let staged =
            self.stage_and_compose(workspace.path(), &raster_pages, &selection, params, output);

        // The workspace is removed on both outcomes; a failed removal is
        // logged but never masks the run's own result.
        if let Err(err) = workspace.close() {
            warn!(error = %err, "Failed to remove staging workspace");
        }

        let inverted_pages = staged?;

        let report = RunReport {
            run_id,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            total_pages,
            inverted_pages,
            duration_ms: started.elapsed().as_millis() as u64,
            completed_at: Utc::now(),
        };
        info!(
            %run_id,
            total_pages,
            inverted_pages,
            duration_ms = report.duration_ms,
            "Pipeline run complete"
        );
        Ok(report)
    }

    /// Create the unique per-run staging directory.
    fn acquire_workspace(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("nachtdruck-");
        let created = match &self.config.staging_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        created.map_err(|err| {
            NachtdruckError::EncodingFailure(format!(
                "failed to create staging workspace: {}",
                err
            ))
        })
    }

    /// Stage every page in ascending order, then compose from the manifest.
    ///
    /// Returns the number of inverted pages. The manifest is an in-memory
    /// list appended in page order; composition never enumerates the
    /// workspace directory, so `page_10` can never sort before `page_2`.
    fn stage_and_compose(
        &self,
        workspace: &Path,
        raster_pages: &[DynamicImage],
        selection: &PageSelection,
        params: InversionParameters,
        output: &Path,
    ) -> Result<usize> {
        let processor = PageProcessor::new(params, self.config.jpeg_quality);
        let mut manifest: Vec<PathBuf> = Vec::with_capacity(raster_pages.len());
        let mut inverted_pages = 0usize;

        for (index, page) in raster_pages.iter().enumerate() {
            let selected = selection.contains(index);
            let staged = processor.process(page, selected)?;

            let artifact = workspace.join(format!("page_{index}.jpg"));
            std::fs::write(&artifact, &staged).map_err(|err| {
                NachtdruckError::EncodingFailure(format!(
                    "failed to stage page {}: {}",
                    index, err
                ))
            })?;

            manifest.push(artifact);
            if selected {
                inverted_pages += 1;
            }
            debug!(page = index, selected, "Artifact staged");
        }

        let mut writer = PdfWriter::new(self.config.paper_size);
        if let Some(stem) = output.file_stem().and_then(|stem| stem.to_str()) {
            writer.set_title(stem);
        }
        writer.write_to_file(&manifest, output)?;

        Ok(inverted_pages)
    }
}

// -- Tests --------------------------------------------------------------------
