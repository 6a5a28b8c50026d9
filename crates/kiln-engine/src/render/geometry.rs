use crate::device::{BufferId, Driver, VertexArrayId};

/// Placeholder vertex data; the shaders never read it, but a draw call needs a
/// bound array to run.
pub const PLACEHOLDER_VERTICES: [i32; 4] = [0; 4];

/// The single static vertex array + buffer the harness draws from.
#[derive(Debug, PartialEq, Eq)]
pub struct Geometry {
    vao: VertexArrayId,
    vbo: BufferId,
}

impl Geometry {
    /// Creates the VAO and VBO, uploads [`PLACEHOLDER_VERTICES`] and binds them
    /// to attribute 0 as one integer component per vertex.
    ///
    /// The VAO stays bound on return.
    pub fn upload<D: Driver + ?Sized>(driver: &D) -> Result<Self, String> {
        let vao = driver.create_vertex_array()?;
        driver.bind_vertex_array(Some(vao));

        let vbo = match driver.create_buffer() {
            Ok(b) => b,
            Err(e) => {
                driver.bind_vertex_array(None);
                driver.delete_vertex_array(vao);
                return Err(e);
            }
        };
        driver.bind_array_buffer(Some(vbo));
        driver.upload_static_array_buffer(bytemuck::cast_slice(&PLACEHOLDER_VERTICES));
        driver.enable_integer_attribute(0, 1);

        Ok(Self { vao, vbo })
    }

    pub fn bind<D: Driver + ?Sized>(&self, driver: &D) {
        driver.bind_vertex_array(Some(self.vao));
    }

    pub fn delete<D: Driver + ?Sized>(self, driver: &D) {
        driver.delete_buffer(self.vbo);
        driver.delete_vertex_array(self.vao);
    }
}
