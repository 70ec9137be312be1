//! Descriptive prompts the built-in variants were generated from.
//!
//! These are sent back to the generative service as tone/style context when
//! the user remixes a variant, so the rewritten document stays faithful to
//! the original art direction.

pub(super) const GEMINI2P5_PROMPT: &str = r#"
Create a cheerful, bright 3D endless runner game titled "New Duck Flies" in a single HTML file using Three.js.

### 1. Visual Style
*   **Theme:** "Dazzlingly Cute". Use a pastel color palette: Sky Blue (#87CEEB), Sunshine Yellow (#FFD700), Cloud White (#FFFFFF), and Soft Pink (#FFC0CB).
*   **Lighting:** Bright, warm sunlight (Hemisphere + Directional lights). Shadows should be soft.
*   **Environment:** A blue sky with fluffy white clouds passing by.
*   **Post-Processing:** Use UnrealBloomPass to make the clouds and the duck glow slightly, creating a magical, dazzling effect.

### 2. Gameplay
*   **Player:** A cute geometric Duck (Yellow sphere head, oval body, orange beak, flapping wings). The duck flies forward.
*   **Obstacles:** Grumpy Storm Clouds (Dark Grey) and Mischievous Crows.
*   **Action:**
    *   **Move:** WASD/Arrow keys to move the duck around the screen.
    *   **Shoot:** Spacebar to spit "Water Bubbles" at enemies.
    *   **Score:** Destroying enemies gives points.
*   **Feedback:** Confetti explosion when enemies are defeated.

### 3. Technical
*   Single HTML file.
*   Responsive canvas.
*   Mobile touch controls (Virtual Joystick + Tap to Shoot).
"#;

pub(super) const GEMINI3_PROMPT: &str = r#"
Create a highly polished, adorable 3D flying game "New Duck Flies" in a single HTML file using Three.js.

### 1. Visual Style & Atmosphere
*   **Aesthetic:** "Dazzlingly Cute". Think Nintendo-like bright colors, soft shading, and a magical atmosphere.
*   **Colors:** Sky Blue (#87CEEB), Duck Yellow (#FFD700), Beak Orange (#FFA500), Cloud White (#FFFFFF).
*   **Post-Processing:** Strong Bloom effect to make the white clouds and bubbles glow angelically.
*   **Environment:**
    *   Infinite scrolling blue sky.
    *   The "ground" (far below) should be soft white clouds.
    *   Particle effects for wind lines to show speed.

### 2. Characters
*   **Player (The Duck):** Distinct geometry using Three.js primitives. Round head, oval body, flapping wings (animated by rotating/scaling), cute orange beak and feet.
*   **Enemies:** Dark, grumpy rain clouds with lightning bolts or silly-looking crows.
*   **Projectiles:** Shining, transparent water bubbles.

### 3. Gameplay
*   **Movement:** Smooth, floaty physics. The duck tilts (banks) when turning.
*   **Action:** Dodge obstacles and shoot bubbles to clear the path.
*   **Feedback:** Screen shake on hit, particle explosions on enemy defeat.

### 4. Technical
*   Single HTML file.
*   Responsive 3D canvas.
*   Mobile touch controls support.
*   Maintain 60FPS using object pooling.
"#;
