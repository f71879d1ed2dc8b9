//! Global CSS styles for the Cardsmith editor.
//!
//! Light slate chrome around the card. Everything marked `.no-print` is
//! hidden when printing so only the card reaches the page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-page: #f1f5f9;
  --surface-card: #ffffff;
  --surface-border: #e2e8f0;

  /* Text */
  --text-strong: #0f172a;
  --text-muted: #64748b;

  /* Accents */
  --blue: #2563eb;
  --blue-hover: #1d4ed8;
  --blue-ring: rgba(37, 99, 235, 0.25);
  --red: #ef4444;

  --font-sans: 'Inter', 'Segoe UI', Arial, sans-serif;
  --radius: 10px;
  --transition-fast: 150ms ease;
}

*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface-page);
  color: var(--text-strong);
  font-family: var(--font-sans);
  font-size: 14px;
  -webkit-font-smoothing: antialiased;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.workspace {
  display: flex;
  gap: 24px;
  padding: 24px;
  align-items: flex-start;
}

.editor-column {
  flex: 1;
  min-width: 360px;
  max-width: 560px;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.preview-column {
  position: sticky;
  top: 24px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 12px;
}

/* === Header === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 16px;
  padding: 12px 24px;
  background: var(--surface-card);
  border-bottom: 1px solid var(--surface-border);
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 10px;
}

.nav-brand__mark { font-size: 24px; }
.nav-brand__title { font-size: 18px; font-weight: 800; }
.nav-brand__subtitle { font-size: 12px; color: var(--text-muted); }

.nav-actions {
  display: flex;
  gap: 8px;
}

.toast {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 6px 12px;
  border-radius: var(--radius);
  background: #ecfdf5;
  color: #047857;
  font-size: 12px;
}

.toast--error {
  background: #fef2f2;
  color: #b91c1c;
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-danger {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 8px 16px;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font-weight: 700;
  font-size: 13px;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary { background: var(--blue); color: #ffffff; }
.btn-primary:hover:not(:disabled) { background: var(--blue-hover); }
.btn-ghost { background: transparent; color: var(--text-strong); border-color: var(--surface-border); }
.btn-ghost:hover { background: var(--surface-page); }
.btn-danger { background: transparent; color: var(--text-muted); }
.btn-danger:hover { color: var(--red); }

button:disabled { opacity: 0.6; cursor: not-allowed; }

.spinner {
  width: 12px;
  height: 12px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #ffffff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.icon-btn {
  border: none;
  background: rgba(15, 23, 42, 0.6);
  color: #ffffff;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  cursor: pointer;
  line-height: 1;
}

.icon-btn:hover { background: var(--red); }

/* === Form === */
.form-section {
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  padding: 16px;
}

.form-section__header {
  display: flex;
  align-items: center;
  gap: 8px;
  margin-bottom: 12px;
}

.form-section__title {
  font-size: 13px;
  font-weight: 800;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.form-section__body {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 12px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.input-label {
  font-size: 11px;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 8px 10px;
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  font: inherit;
  background: #f8fafc;
}

.input-field:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 3px var(--blue-ring);
}

.textarea { resize: vertical; }

.color-row {
  display: flex;
  gap: 8px;
}

.color-input {
  width: 40px;
  height: 32px;
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  cursor: pointer;
}

/* === Image wells === */
.image-well {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 2px dashed var(--surface-border);
  border-radius: var(--radius);
  background: #f8fafc;
  cursor: pointer;
  overflow: hidden;
}

.image-well:hover { border-color: var(--blue); }
.image-well .close-btn { position: absolute; top: 4px; right: 4px; }
.image-well__preview { width: 100%; height: 100%; object-fit: contain; }
.image-well__hint { color: var(--text-muted); font-size: 12px; }
.image-upload__error { color: var(--red); font-size: 12px; }

.aspect-square { aspect-ratio: 1 / 1; max-width: 120px; }
.aspect-video { aspect-ratio: 16 / 9; }
.aspect-portrait { aspect-ratio: 3 / 4; max-width: 120px; }

/* === Preview === */
.preview-toolbar {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.preview-toolbar__title {
  font-size: 12px;
  font-weight: 800;
  text-transform: uppercase;
  color: var(--text-muted);
}

.segmented {
  display: inline-flex;
  padding: 3px;
  border-radius: 999px;
  background: var(--surface-border);
}

.segmented__option {
  border: none;
  background: transparent;
  padding: 4px 14px;
  border-radius: 999px;
  font-size: 11px;
  font-weight: 800;
  cursor: pointer;
  color: var(--text-muted);
}

.segmented__option--active {
  background: var(--surface-card);
  color: var(--blue);
}

.card-stage {
  border-radius: 14px;
  overflow: hidden;
  box-shadow: 0 20px 40px rgba(15, 23, 42, 0.18);
}

.card-stage svg { display: block; }

.preview-hint { font-size: 12px; color: var(--text-muted); }

/* === Print === */
@media print {
  .no-print { display: none !important; }
  body { background: #ffffff; }
  .workspace { padding: 0; }
  .preview-column { position: static; }
  .card-stage { box-shadow: none; }
}
"#;
