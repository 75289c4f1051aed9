//! Global CSS styles for the Phoenix Events site.
//!
//! Colours are custom properties switched by the `theme-light` and
//! `theme-dark` classes on the application root.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme Palettes === */
.theme-light {
  --background: #fdfaf6;
  --card: #ffffff;
  --foreground: #2b2320;
  --muted: #7a6f69;
  --border: #efe4da;
  --primary: #c2185b;
  --primary-foreground: #ffffff;
  --accent: #d4af37;
  --overlay: rgba(253, 250, 246, 0.55);
  --shadow: 0 10px 30px rgba(194, 24, 91, 0.12);
}

.theme-dark {
  --background: #0d0b0a;
  --card: #171311;
  --foreground: #f5efe6;
  --muted: #a79d92;
  --border: #2a2421;
  --primary: #d4af37;
  --primary-foreground: #0d0b0a;
  --accent: #f0d78c;
  --overlay: rgba(13, 11, 10, 0.6);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.45);
}

:root {
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --whatsapp: #25d366;
  --danger: #e5484d;
  --success: #2f9e44;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

/* The root element is the page's scroll container. */
.app-root {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition-slow), color var(--transition-slow);
}

.app-root.scroll-locked {
  overflow: hidden;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

h1, h2, h3, h4 {
  font-family: var(--font-serif);
  line-height: 1.2;
}

.text-gradient-gold {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.eyebrow {
  color: var(--primary);
  font-size: 0.8rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
}

/* === Buttons === */
.btn-premium, .btn-outline, .btn-ghost, .btn-whatsapp {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  font-family: var(--font-sans);
  font-size: 0.95rem;
  letter-spacing: 0.02em;
  cursor: pointer;
  border: 1px solid transparent;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    background var(--transition-normal);
}

.btn-premium {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  color: var(--primary-foreground);
  box-shadow: var(--shadow);
}

.btn-outline {
  background: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outline:hover {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-ghost {
  background: transparent;
  color: var(--foreground);
}

.btn-whatsapp {
  background: var(--whatsapp);
  color: #ffffff;
}

.btn-premium:hover, .btn-whatsapp:hover {
  transform: translateY(-2px);
}

.btn-lg {
  padding: 1rem 2rem;
  font-size: 1.05rem;
}

.btn-block {
  width: 100%;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--card);
  color: var(--foreground);
  font-size: 1.5rem;
  cursor: pointer;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.icon-btn:disabled {
  opacity: 0.35;
  cursor: default;
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: var(--card);
  box-shadow: var(--shadow);
  border-bottom: 1px solid var(--border);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 5rem;
  padding: 0 2rem;
}

.logo {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
}

.logo-mark {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  font-weight: 700;
  color: var(--primary);
}

.logo-sub {
  font-size: 0.75rem;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  color: var(--muted);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-size: 0.9rem;
  color: var(--foreground);
  opacity: 0.8;
}

.nav-link.active, .nav-link:hover {
  color: var(--primary);
  opacity: 1;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.theme-toggle {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: none;
  background: transparent;
  color: var(--foreground);
  font-size: 1.2rem;
  cursor: pointer;
}

.menu-toggle {
  display: none;
  border: none;
  background: transparent;
  color: var(--foreground);
  font-size: 1.5rem;
  cursor: pointer;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0 2rem;
  max-height: 0;
  overflow: hidden;
  background: var(--card);
  transition: max-height var(--transition-normal);
}

.mobile-menu.open {
  max-height: 100vh;
  padding: 1.5rem 2rem;
}

.mobile-link {
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--border);
}

.mobile-link.active {
  color: var(--primary);
}

/* === Sections === */
.section {
  padding: 6rem 2rem;
}

.section-header {
  text-align: center;
  max-width: 48rem;
  margin: 0 auto 3rem;
}

.section-header h2 {
  font-size: 2.5rem;
  margin: 0.5rem 0 1rem;
}

.section-header.split {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  max-width: none;
  text-align: left;
}

.section-footer {
  display: flex;
  justify-content: center;
  margin-top: 3rem;
}

/* === Hero === */
.hero {
  position: relative;
  height: calc(100vh - 5rem);
  overflow: hidden;
}

.hero-slide {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity 1s ease;
}

.hero-slide.active {
  opacity: 1;
}

.hero-slide img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, var(--overlay), var(--background));
}

.hero-content {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  text-align: center;
  padding: 0 1rem;
  animation: fade-up 0.8s ease both;
}

.hero-content h1 {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
}

.hero-lead {
  max-width: 40rem;
  color: var(--muted);
  font-size: 1.2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
  justify-content: center;
}

.hero .slide-dots {
  position: absolute;
  bottom: 8rem;
  left: 50%;
  transform: translateX(-50%);
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  border: none;
  background: transparent;
  color: var(--foreground);
  font-size: 2rem;
  cursor: pointer;
  animation: float 3s ease-in-out infinite;
}

/* === Slide controls === */
.slide-dots {
  display: flex;
  gap: 0.5rem;
  justify-content: center;
}

.slide-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 999px;
  border: none;
  background: var(--muted);
  opacity: 0.4;
  cursor: pointer;
  transition: width var(--transition-normal), opacity var(--transition-normal);
}

.slide-dot.active {
  width: 2rem;
  background: var(--primary);
  opacity: 1;
}

.slide-arrows {
  display: flex;
  justify-content: space-between;
  position: absolute;
  inset: 50% -1rem auto;
  transform: translateY(-50%);
  pointer-events: none;
}

.slide-arrows .icon-btn {
  pointer-events: auto;
}

/* === Carousel === */
.carousel {
  position: relative;
}

.carousel-track {
  display: flex;
  gap: 1.5rem;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
  padding-bottom: 1rem;
}

.carousel-track::-webkit-scrollbar {
  display: none;
}

.carousel-track > * {
  flex: 0 0 18.5rem;
  scroll-snap-align: start;
}

.carousel-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.carousel-dots, .lightbox-dots {
  display: flex;
  gap: 0.4rem;
}

.dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  border: none;
  background: var(--muted);
  opacity: 0.4;
}

.dot.active {
  background: var(--primary);
  opacity: 1;
}

.event-card {
  position: relative;
  display: block;
  height: 24rem;
  border-radius: 1rem;
  overflow: hidden;
  box-shadow: var(--shadow);
}

.event-card-link {
  display: block;
  height: 100%;
}

.event-card-plan {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 2;
  padding: 0.4rem 0.9rem;
  border: none;
  border-radius: 999px;
  font-size: 0.8rem;
  color: #ffffff;
  background: #25d366;
  cursor: pointer;
  opacity: 0;
  transition: opacity var(--transition-slow);
}

.event-card:hover .event-card-plan,
.event-card-plan:focus-visible {
  opacity: 1;
}

.event-card img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.event-card:hover img {
  transform: scale(1.08);
}

.event-card-body {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1.5rem;
  color: #ffffff;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.75), transparent);
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transition: opacity 0.7s ease, transform 0.7s ease;
}

.reveal-fade-up { transform: translateY(2rem); }
.reveal-fade-in { transform: none; }
.reveal-scale-in { transform: scale(0.92); }
.reveal-slide-left { transform: translateX(-3rem); }
.reveal-slide-right { transform: translateX(3rem); }

.reveal.visible {
  opacity: 1;
  transform: none;
}

/* === About === */
.about-section {
  background: var(--card);
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-text {
  color: var(--muted);
  line-height: 1.7;
  margin-bottom: 1.25rem;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.5rem;
  padding-top: 2rem;
}

.stat-card {
  padding: 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  text-align: center;
}

.stat-icon {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.stat-value {
  font-size: 1.75rem;
  font-weight: 700;
}

.stat-label {
  font-size: 0.75rem;
  color: var(--muted);
}

.about-collage {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.about-column {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.about-column.offset {
  padding-top: 2rem;
}

.about-column img {
  width: 100%;
  height: 14rem;
  object-fit: cover;
  border-radius: 0.75rem;
}

/* === Why Choose Us === */
.reasons-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 2rem;
}

.reason-card {
  padding: 2rem;
  border-radius: 1rem;
  background: var(--card);
  border: 1px solid var(--border);
  text-align: center;
}

.reason-icon {
  font-size: 2rem;
  margin-bottom: 1rem;
}

/* === Gallery === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.pill {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--card);
  color: var(--foreground);
  cursor: pointer;
}

.pill-count {
  margin-left: 0.5rem;
  padding: 0 0.45rem;
  border-radius: 999px;
  font-size: 0.75rem;
  background: var(--border);
}

.pill.selected .pill-count {
  background: rgba(255, 255, 255, 0.25);
}

.pill.selected {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--primary-foreground);
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  grid-auto-rows: 14rem;
  gap: 1rem;
}

.gallery-grid > .reveal:first-child {
  grid-column: span 2;
  grid-row: span 2;
}

.gallery-tile {
  position: relative;
  width: 100%;
  height: 100%;
  border: none;
  border-radius: 0.75rem;
  overflow: hidden;
  cursor: zoom-in;
}

.gallery-tile img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery-tile-label {
  position: absolute;
  left: 1rem;
  bottom: 1rem;
  color: #ffffff;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.gallery-tile:hover .gallery-tile-label {
  opacity: 1;
}

/* === Lightbox & Modals === */
.lightbox-overlay, .modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  animation: fade-in 0.2s ease both;
  outline: none;
}

.lightbox-overlay {
  flex-direction: column;
  background: rgba(0, 0, 0, 0.92);
}

.lightbox-overlay.closing {
  animation: fade-out 0.2s ease both;
}

.modal-overlay {
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(6px);
}

.close-btn {
  position: absolute;
  top: 1.5rem;
  right: 1.5rem;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.lightbox-nav.prev { left: 1.5rem; }
.lightbox-nav.next { right: 1.5rem; }

.lightbox-content {
  max-width: 85vw;
  max-height: 75vh;
  touch-action: pan-y;
}

.lightbox-image {
  max-height: 70vh;
  border-radius: 0.5rem;
  animation: scale-in 0.25s ease both;
}

.lightbox-caption, .lightbox-empty, .lightbox-counter, .lightbox-hint {
  color: #f5efe6;
  text-align: center;
}

.lightbox-footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.lightbox-hint {
  font-size: 0.8rem;
  opacity: 0.6;
}

.modal-dialog {
  position: relative;
  width: min(28rem, 90vw);
  padding: 2.5rem 2rem 2rem;
  border-radius: 1.25rem;
  background: var(--card);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
  text-align: center;
  animation: scale-in 0.25s ease both;
}

.modal-dialog h2 {
  margin: 1rem 0 0.5rem;
}

.modal-actions, .coming-soon-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 1.5rem;
}

.coming-soon-icon {
  font-size: 3rem;
}

.coming-soon-page, .not-found {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  text-align: center;
  padding: 4rem 2rem;
}

/* === Testimonials === */
.testimonial-stage {
  position: relative;
  max-width: 48rem;
  margin: 0 auto 2rem;
}

.testimonial {
  padding: 3rem;
  border-radius: 1.25rem;
  background: var(--card);
  text-align: center;
}

.testimonial.slide-from-right { animation: slide-from-right 0.5s ease both; }
.testimonial.slide-from-left { animation: slide-from-left 0.5s ease both; }

.testimonial-avatar {
  width: 5rem;
  height: 5rem;
  border-radius: 50%;
  object-fit: cover;
  margin: 0 auto 1.5rem;
}

.testimonial blockquote {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.25rem;
  margin-bottom: 1.5rem;
}

.testimonial-event {
  color: var(--primary);
  font-size: 0.85rem;
}

/* === CTA === */
.cta-content {
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  align-items: center;
}

.cta-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
  justify-content: center;
}

.trust-badges {
  display: flex;
  gap: 2rem;
  color: var(--muted);
  font-size: 0.85rem;
}

/* === Forms === */
.page-hero {
  padding: 6rem 2rem 3rem;
  text-align: center;
}

.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 3rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2.5rem;
  border-radius: 1.25rem;
  background: var(--card);
  border: 1px solid var(--border);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  font-size: 0.85rem;
  color: var(--foreground);
}

.input-required {
  color: var(--primary);
}

.input-field {
  padding: 0.75rem 1rem;
  border-radius: 0.6rem;
  border: 1px solid var(--border);
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  font-size: 0.95rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
}

.form-hint, .info-label {
  color: var(--muted);
  font-size: 0.85rem;
}

.form-error { color: var(--danger); }
.form-success { color: var(--success); }

.contact-info ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.info-label {
  display: block;
}

/* === Footer === */
.footer {
  padding: 4rem 2rem 2rem;
  background: var(--card);
  border-top: 1px solid var(--border);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr 1.5fr;
  gap: 2rem;
}

.footer-column ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  margin-top: 1rem;
}

.footer-link {
  color: var(--muted);
}

.footer-link:hover {
  color: var(--primary);
}

.footer-bottom {
  margin-top: 3rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--border);
  color: var(--muted);
  font-size: 0.85rem;
  text-align: center;
}

/* === Floating actions === */
.whatsapp-float {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 60;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  border: none;
  background: var(--whatsapp);
  color: #ffffff;
  font-size: 1.6rem;
  cursor: pointer;
  box-shadow: 0 0 20px rgba(37, 211, 102, 0.4);
}

.mobile-action-bar {
  display: none;
  position: fixed;
  inset: auto 1rem 1rem 1rem;
  z-index: 60;
  gap: 0.75rem;
  padding: 0.75rem;
  border-radius: 1rem;
  background: var(--card);
  box-shadow: var(--shadow);
  transform: translateY(150%);
  opacity: 0;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.mobile-action-bar.visible {
  transform: none;
  opacity: 1;
}

.action-plan {
  flex: 1;
}

/* === Small screens === */
@media (max-width: 1024px) {
  .nav-links, .nav-cta { display: none; }
  .menu-toggle { display: block; }
  .mobile-menu { display: flex; }
  .mobile-action-bar { display: flex; }
  .whatsapp-float { display: none; }
  .contact-grid, .footer-grid { grid-template-columns: 1fr; }
  .gallery-grid { grid-template-columns: repeat(2, 1fr); }
  .about-grid { grid-template-columns: 1fr; }
  .stats-grid { grid-template-columns: repeat(2, 1fr); }
}

/* === Keyframes === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(2rem); }
  to { opacity: 1; transform: none; }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.92); }
  to { opacity: 1; transform: none; }
}

@keyframes slide-from-right {
  from { opacity: 0; transform: translateX(3rem); }
  to { opacity: 1; transform: none; }
}

@keyframes slide-from-left {
  from { opacity: 0; transform: translateX(-3rem); }
  to { opacity: 1; transform: none; }
}

@keyframes float {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -0.5rem); }
}
"#;
