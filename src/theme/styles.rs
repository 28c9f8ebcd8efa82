//! Global CSS styles for Game Store.
//!
//! Dark storefront palette with a magenta call-to-action color.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-main: #06092b;
  --bg-surface: #030517;
  --bg-white: #fafafa;
  --bg-light: #eaeaea;

  /* Brand */
  --primary: #f231a5;
  --primary-glow: rgba(242, 49, 165, 0.3);
  --secondary: #3cd3c1;

  /* Text */
  --text-white: #fafafa;
  --text-black: #030517;
  --text-gray: #8f8f8f;
  --text-dark-gray: #2e2f42;

  /* Semantic */
  --danger: #ff6347;
  --success: #3cd3c1;

  /* Typography */
  --font-sans: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Spacing */
  --space-xs: 0.5rem;
  --space-sm: 1rem;
  --space-md: 1.5rem;
  --space-lg: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease-in-out;
  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-main);
  color: var(--text-white);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Layout === */
.store-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-sm) var(--space-lg);
  border-bottom: 1px solid rgba(250, 250, 250, 0.1);
}

.store-logo {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--text-white);
}

.store-header-actions {
  display: flex;
  align-items: center;
  gap: var(--space-md);
}

.store-main {
  max-width: 1100px;
  margin: 0 auto;
  padding: var(--space-lg);
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: var(--space-md);
  border-left: 0.5rem solid var(--secondary);
  padding-left: var(--space-xs);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-gray);
  margin-bottom: var(--space-sm);
}

/* === Buttons === */
.btn-primary,
.btn-minimal {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-xs);
  border: 0;
  border-radius: 0.4rem;
  font-family: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: filter var(--transition-fast), background var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(180deg, #ff5f5f 0%, var(--primary) 50%);
  color: var(--text-white);
}

.btn-primary:hover {
  filter: brightness(1.1);
  box-shadow: 0 0 12px var(--primary-glow);
}

.btn-minimal {
  background: none;
  color: var(--primary);
}

.btn-minimal:hover {
  color: #e90980;
}

.btn-primary:disabled,
.btn-minimal:disabled {
  cursor: not-allowed;
  filter: saturate(30%);
}

.btn-small { height: 3rem; font-size: var(--text-xs); padding: 0 var(--space-xs); }
.btn-medium { height: 4rem; font-size: var(--text-sm); padding: var(--space-xs) var(--space-md); }
.btn-large { height: 5rem; font-size: var(--text-base); padding: var(--space-xs) var(--space-lg); }

/* === Forms === */
.form {
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
  max-width: 28rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.input-label,
.password-label {
  font-size: var(--text-sm);
  color: var(--text-white);
  cursor: pointer;
  margin-bottom: 0.25rem;
}

.input-field {
  background: var(--bg-light);
  border: 0.2rem solid var(--bg-light);
  border-radius: 0.2rem;
  padding: 0 var(--space-xs);
  height: 3rem;
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-black);
  outline: none;
}

.input-field:focus {
  box-shadow: 0 0 0.5rem var(--primary);
}

.form-success {
  color: var(--success);
  font-size: var(--text-sm);
}

/* === Password Field === */
.password-field {
  display: flex;
  flex-direction: column;
}

.password-input-wrapper {
  display: flex;
  align-items: center;
  gap: var(--space-xs);
  background: var(--bg-light);
  border: 0.2rem solid var(--bg-light);
  border-radius: 0.2rem;
  padding: 0 var(--space-xs);
}

.password-input-wrapper:focus-within {
  box-shadow: 0 0 0.5rem var(--primary);
}

.password-input {
  flex: 1;
  background: transparent;
  border: 0;
  outline: none;
  height: 3rem;
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--text-black);
}

.password-input::placeholder {
  color: var(--text-gray);
}

.password-toggle {
  display: flex;
  color: var(--text-gray);
  cursor: pointer;
}

.password-toggle:hover {
  color: var(--primary);
}

.password-loading {
  font-size: var(--text-xs);
  color: var(--text-gray);
  white-space: nowrap;
}

.password-error {
  font-size: var(--text-xs);
  color: var(--danger);
  margin-top: 0.25rem;
}

.password-field.has-error .password-input-wrapper {
  border-color: var(--danger);
}

.password-field.disabled .password-label,
.password-field.disabled .password-input,
.password-field.disabled .password-toggle {
  cursor: not-allowed;
  color: var(--text-gray);
}

/* === Dropdown === */
.dropdown {
  position: relative;
}

.dropdown-title {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  background: none;
  border: 0;
  color: var(--text-white);
  font-family: inherit;
  cursor: pointer;
  position: relative;
  z-index: 30;
}

.dropdown-content {
  position: absolute;
  right: 0;
  margin-top: var(--space-xs);
  min-width: 16rem;
  background: var(--bg-white);
  color: var(--text-black);
  border-radius: 0.4rem;
  opacity: 0;
  visibility: hidden;
  transform: translateY(-1rem);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
  z-index: 30;
}

.dropdown.open .dropdown-content {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

.dropdown-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  z-index: 20;
}

.username {
  padding: 0 0.25rem;
}

/* === User Nav === */
.user-nav {
  display: flex;
  flex-direction: column;
}

.user-nav-link {
  display: block;
  padding: var(--space-xs) var(--space-sm);
  color: var(--text-black);
  transition: background var(--transition-fast);
}

.user-nav-link:hover {
  background: var(--primary);
  color: var(--text-white);
}

.user-nav-item {
  display: flex;
  align-items: center;
  gap: var(--space-xs);
}

/* === Cart === */
.cart-badge {
  background: var(--secondary);
  color: var(--text-white);
  border-radius: 50%;
  font-size: var(--text-xs);
  min-width: 1.5rem;
  height: 1.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.cart-list {
  background: var(--bg-white);
  color: var(--text-black);
  border-radius: 0.4rem;
}

.cart-list.empty {
  padding: var(--space-lg);
}

.cart-list-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-sm);
  padding: var(--space-sm) var(--space-md);
  background: var(--bg-light);
  font-weight: 600;
}

.cart-list-total {
  color: var(--primary);
}

/* === Game Item === */
.game-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-sm) var(--space-md);
  border-bottom: 1px solid var(--bg-light);
}

.game-item-content {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
}

.game-item-image img {
  width: 9.6rem;
  height: 5.6rem;
  object-fit: cover;
}

.game-item-title {
  font-size: var(--text-base);
  font-weight: 600;
}

.game-item-price {
  display: inline-block;
  background: var(--secondary);
  color: var(--text-white);
  font-size: var(--text-sm);
  border-radius: 0.2rem;
  padding: 0.1rem 0.5rem;
}

.game-item-remove {
  background: none;
  border: 0;
  color: var(--primary);
  cursor: pointer;
  font-family: inherit;
}

/* === Game Grid === */
.game-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(15rem, 1fr));
  gap: var(--space-md);
}

.game-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
  background: var(--bg-white);
  color: var(--text-black);
  border-radius: 0.4rem;
  padding: var(--space-sm);
}

.game-card-image {
  width: 100%;
  height: 8.75rem;
  object-fit: cover;
}

.game-card-title {
  font-size: var(--text-base);
}

.game-card-price {
  color: var(--primary);
  font-weight: 600;
}

/* === Empty State === */
.empty {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: var(--space-sm);
}

.empty-title {
  font-size: var(--text-xl);
}

.empty-description {
  color: var(--text-gray);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 640px) {
  .store-header {
    padding: var(--space-sm);
  }

  .store-main {
    padding: var(--space-sm);
  }

  .game-item-image {
    display: none;
  }
}
"#;
