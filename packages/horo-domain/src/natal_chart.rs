use serde::{Deserialize, Serialize};

const HOUSE_KEYS: [&str; 12] = [
	"house1", "house2", "house3", "house4", "house5", "house6", "house7", "house8", "house9",
	"house10", "house11", "house12",
];

/// A full natal chart as the app computes it at sign-up.
///
/// Field names follow the app's camelCase profile keys. Every field is optional on the wire and
/// defaults to empty, so partially computed charts still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NatalChart {
	pub name: String,
	pub sun: String,
	pub moon: String,
	pub mercury: String,
	pub venus: String,
	pub mars: String,
	pub jupiter: String,
	pub saturn: String,
	pub uranus: String,
	pub neptune: String,
	pub pluto: String,
	pub ascendant: String,
	pub descendant: String,
	pub mc: String,
	pub ic: String,
	pub house1: String,
	pub house2: String,
	pub house3: String,
	pub house4: String,
	pub house5: String,
	pub house6: String,
	pub house7: String,
	pub house8: String,
	pub house9: String,
	pub house10: String,
	pub house11: String,
	pub house12: String,
	pub conjunction_aspect: String,
	pub opposition_aspect: String,
	pub trine_aspect: String,
	pub square_aspect: String,
	pub sextile_aspect: String,
	pub fire_ratio: Option<i64>,
	pub earth_ratio: Option<i64>,
	pub air_ratio: Option<i64>,
	pub water_ratio: Option<i64>,
}
impl NatalChart {
	pub fn houses(&self) -> [&str; 12] {
		[
			self.house1.as_str(),
			self.house2.as_str(),
			self.house3.as_str(),
			self.house4.as_str(),
			self.house5.as_str(),
			self.house6.as_str(),
			self.house7.as_str(),
			self.house8.as_str(),
			self.house9.as_str(),
			self.house10.as_str(),
			self.house11.as_str(),
			self.house12.as_str(),
		]
	}

	/// Every string field with its wire name.
	pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
		let mut fields = vec![
			("name", self.name.as_str()),
			("sun", self.sun.as_str()),
			("moon", self.moon.as_str()),
			("mercury", self.mercury.as_str()),
			("venus", self.venus.as_str()),
			("mars", self.mars.as_str()),
			("jupiter", self.jupiter.as_str()),
			("saturn", self.saturn.as_str()),
			("uranus", self.uranus.as_str()),
			("neptune", self.neptune.as_str()),
			("pluto", self.pluto.as_str()),
			("ascendant", self.ascendant.as_str()),
			("descendant", self.descendant.as_str()),
			("mc", self.mc.as_str()),
			("ic", self.ic.as_str()),
		];

		fields.extend(HOUSE_KEYS.into_iter().zip(self.houses()));
		fields.extend([
			("conjunctionAspect", self.conjunction_aspect.as_str()),
			("oppositionAspect", self.opposition_aspect.as_str()),
			("trineAspect", self.trine_aspect.as_str()),
			("squareAspect", self.square_aspect.as_str()),
			("sextileAspect", self.sextile_aspect.as_str()),
		]);

		fields
	}
}

/// Renders the Vietnamese instruction for a full natal chart reading.
///
/// The app splits the reply on blank lines and renders `**title**` paragraphs as section headers,
/// so the template asks for exactly that layout.
pub fn build_natal_prompt(chart: &NatalChart) -> String {
	let houses = chart
		.houses()
		.iter()
		.enumerate()
		.map(|(index, sign)| format!("Nhà {}: {}", index + 1, or_unknown(sign)))
		.collect::<Vec<_>>()
		.join("; ");

	format!(
		"\
Bạn là một chiêm tinh gia giàu kinh nghiệm. Hãy phân tích bản đồ sao cá nhân của {name} dựa trên \
các thông tin sau.
Các hành tinh: Mặt Trời {sun}, Mặt Trăng {moon}, Sao Thủy {mercury}, Sao Kim {venus}, Sao Hỏa \
{mars}, Sao Mộc {jupiter}, Sao Thổ {saturn}, Sao Thiên Vương {uranus}, Sao Hải Vương {neptune}, \
Sao Diêm Vương {pluto}.
Các điểm góc: Cung Mọc {ascendant}, Cung Lặn {descendant}, Thiên Đỉnh {mc}, Thiên Đáy {ic}.
Các nhà: {houses}.
Góc chiếu: Hợp {conjunction}; Đối {opposition}; Tam hợp {trine}; Vuông {square}; Lục hợp \
{sextile}.
Tỉ lệ nguyên tố: Lửa {fire}, Đất {earth}, Khí {air}, Nước {water}.
Yêu cầu:
- Viết bằng tiếng Việt, giọng văn sâu sắc, ấm áp, xưng hô với người đọc là \"bạn\".
- Chia thành 5 phần, mỗi phần bắt đầu bằng một tiêu đề in đậm dạng **Tiêu đề** và cách nhau bởi \
một dòng trống: Tính cách cốt lõi, Cảm xúc và nội tâm, Tình yêu và các mối quan hệ, Sự nghiệp và \
tài chính, Lời khuyên phát triển bản thân.
- Mỗi phần khoảng 80 đến 120 từ.
- Không chào hỏi, không dùng emoji, không có câu mở đầu hay câu kết mang tính trang trí.
- Chỉ trả về nội dung phân tích.",
		name = chart.name,
		sun = chart.sun,
		moon = chart.moon,
		mercury = or_unknown(&chart.mercury),
		venus = or_unknown(&chart.venus),
		mars = or_unknown(&chart.mars),
		jupiter = or_unknown(&chart.jupiter),
		saturn = or_unknown(&chart.saturn),
		uranus = or_unknown(&chart.uranus),
		neptune = or_unknown(&chart.neptune),
		pluto = or_unknown(&chart.pluto),
		ascendant = or_unknown(&chart.ascendant),
		descendant = or_unknown(&chart.descendant),
		mc = or_unknown(&chart.mc),
		ic = or_unknown(&chart.ic),
		conjunction = or_unknown(&chart.conjunction_aspect),
		opposition = or_unknown(&chart.opposition_aspect),
		trine = or_unknown(&chart.trine_aspect),
		square = or_unknown(&chart.square_aspect),
		sextile = or_unknown(&chart.sextile_aspect),
		fire = ratio(chart.fire_ratio),
		earth = ratio(chart.earth_ratio),
		air = ratio(chart.air_ratio),
		water = ratio(chart.water_ratio),
	)
}

fn or_unknown(value: &str) -> &str {
	if value.is_empty() { "không rõ" } else { value }
}

fn ratio(value: Option<i64>) -> String {
	value.map_or_else(|| "không rõ".to_string(), |percent| format!("{percent}%"))
}
