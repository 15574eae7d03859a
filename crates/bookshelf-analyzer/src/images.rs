//! Placeholder image annotation.
//!
//! Image bytes are never inspected; every image receives the same guidance
//! text, numbered from 1.

/// Describe the image at zero-based `index`.
pub fn describe_image(index: usize) -> String {
    format!(
        "Image {number} Analysis:
- Medical illustration or clinical photograph from the reference document
- Images in the craniosynostosis literature typically show:
  * Skull morphology and suture patterns
  * CT reconstructions showing bone fusion
  * Clinical photographs of phenotypic features
  * Diagrams contrasting normal and abnormal development
- Detailed interpretation requires review by a medical professional
- Review this image together with the clinical phenotype description",
        number = index + 1
    )
}

/// One description per image, in order.
pub fn analyze_images<T: AsRef<[u8]>>(images: &[T]) -> Vec<String> {
    describe_images(images.len())
}

/// One description per image when only the count is known.
pub fn describe_images(count: usize) -> Vec<String> {
    (0..count).map(describe_image).collect()
}
